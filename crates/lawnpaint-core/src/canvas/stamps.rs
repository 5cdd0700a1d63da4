//! Stock pattern masks.
//!
//! A mask is a nested-rows bitmap (rows are Sunday..Saturday) painted onto a
//! grid via [`Grid::stamp`](super::Grid::stamp).

/// 7x5 tulip bloom: a flower head over a straight stem, spanning five weeks.
pub fn tulip() -> Vec<Vec<u8>> {
    vec![
        vec![0, 0, 1, 0, 0],
        vec![0, 1, 1, 1, 0],
        vec![1, 1, 1, 1, 1],
        vec![0, 1, 1, 1, 0],
        vec![0, 0, 1, 0, 0],
        vec![0, 0, 1, 0, 0],
        vec![0, 0, 1, 0, 0],
    ]
}

/// Start columns that spread six tulips evenly across a 52-week year.
pub fn tulip_weeks() -> Vec<usize> {
    vec![5, 14, 23, 32, 41, 50]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::Grid;

    #[test]
    fn tulip_mask_fits_a_week_grid() {
        let mask = tulip();
        assert_eq!(mask.len(), 7);
        assert!(mask.iter().all(|row| row.len() == 5));
    }

    #[test]
    fn stamping_default_weeks_clips_the_final_tulip_at_year_end() {
        let mask = tulip();
        let mut grid = Grid::new(7, 52).unwrap();
        for start in tulip_weeks() {
            grid.stamp(&mask, start, 3).unwrap();
        }
        // First tulip stem lands at week 5 + 2.
        assert_eq!(grid.get(6, 7), Some(3));
        // The last tulip starts at week 50; its petals at columns 50 and 51
        // survive while the rest falls off the 52-week canvas.
        assert_eq!(grid.get(2, 50), Some(3));
        assert_eq!(grid.get(2, 51), Some(3));
        assert_eq!(grid.get(2, 52), None);
    }
}
