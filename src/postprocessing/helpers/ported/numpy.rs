/* PORTED NUMPY FUNCTIONS */

use ndarray::ArrayView2;

/// Returns the mean of one column of a 2D array, like `numpy.mean(arr[:, index])`.
///
/// # Arguments
///
/// * `arr` - Input 2D array.
/// * `index` - The column to average.
///
/// # Returns
///
/// * The mean of the column, or `None` if the array has no rows or no such column.
pub fn column_mean(arr: ArrayView2<f64>, index: usize) -> Option<f64> {
    if index >= arr.ncols() {
        return None;
    }
    arr.column(index).mean()
}

/// Returns the minimum and maximum of the values, like `(numpy.min(arr), numpy.max(arr))`.
///
/// # Arguments
///
/// * `values` - Input values.
///
/// # Returns
///
/// * The `(min, max)` pair, or `None` if there are no values.
pub fn min_max<I: IntoIterator<Item = f64>>(values: I) -> Option<(f64, f64)> {
    values.into_iter().fold(None, |acc, value| match acc {
        None => Some((value, value)),
        Some((low, high)) => Some((low.min(value), high.max(value))),
    })
}

#[cfg(test)]
mod tests {
    use ndarray::{array, Array2};

    use super::*;

    #[test]
    fn test_column_mean() {
        let arr = array![[1.0, 2.0, 3.0], [2.0, 3.0, 4.0]];
        assert_eq!(column_mean(arr.view(), 2), Some(3.5));
        assert_eq!(column_mean(arr.view(), 0), Some(1.5));
        assert_eq!(column_mean(arr.view(), 3), None);
    }

    #[test]
    fn test_column_mean_of_empty_array() {
        let arr = Array2::<f64>::zeros((0, 3));
        assert_eq!(column_mean(arr.view(), 1), None);
    }

    #[test]
    fn test_min_max() {
        assert_eq!(min_max(vec![0.3, 0.1, 0.7]), Some((0.1, 0.7)));
        assert_eq!(min_max(vec![0.5]), Some((0.5, 0.5)));
        assert_eq!(min_max(Vec::<f64>::new()), None);
    }
}
