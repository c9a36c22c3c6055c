#![cfg(test)]

use super::*;
use crate::util::error::IndexOutOfRange;

#[test]
fn test_from_rows_shape() {
    let grid = Array2D::from_rows([[1, 2, 3], [4, 5, 6]]).unwrap();
    assert_eq!((grid.rows(), grid.cols()), (2, 3));
    assert_eq!(grid.get(0, 0), Ok(&1));
    assert_eq!(grid.get(-1, -1), Ok(&6));
    assert_eq!(grid.get(1, 1), Ok(&5));

    assert_eq!(
        Array2D::from_rows([vec![1, 2], vec![3, 4], vec![5]]).err().map(|e| e.reason),
        Some("all rows of a 2-D array must have the same length"),
        "Ragged input should be rejected."
    );

    let empty = Array2D::<u8>::from_rows(Vec::<Vec<u8>>::new()).unwrap();
    assert!(empty.is_empty());
    assert_eq!((empty.rows(), empty.cols()), (0, 0));
}

#[test]
fn test_index_bounds() {
    let grid = Array2D::from_rows([[1, 2], [3, 4]]).unwrap();

    assert_eq!(grid.get(2, 0), Err(IndexOutOfRange { index: 2, len: 2 }));
    assert_eq!(grid.get(0, -3), Err(IndexOutOfRange { index: -3, len: 2 }));
    assert!(grid.row(-3).is_err());

    let row = grid.row(-1).unwrap();
    assert_eq!(row.index(), 1);
    assert_eq!(row.len(), 2);
    assert_eq!(row.get(-2), Ok(&3));
    assert!(row.get(2).is_err());
}

#[test]
fn test_mutation() {
    let mut grid: Array2D<u8> = Array2D::filled(3, 2);
    assert!(grid.iter_rows().all(|row| row.iter().all(|cell| *cell == 0)));

    assert_eq!(grid.set(1, 0, 7), Ok(0));
    *grid.get_mut(2, -1).unwrap() = 9;
    grid.row_mut(0).unwrap().copy_from_slice(&[1, 1]);

    assert_eq!(grid.to_string(), "[[1, 1], [7, 0], [0, 9]]");
    assert!(grid.set(3, 0, 1).is_err());
}

#[test]
fn test_row_iteration() {
    let grid = Array2D::from_rows([["a", "b"], ["c", "d"], ["e", "f"]]).unwrap();

    let forward: Vec<String> = grid.iter_rows().map(|row| row.to_string()).collect();
    assert_eq!(forward, ["[a, b]", "[c, d]", "[e, f]"]);

    let backward: Vec<usize> = grid.iter_rows().rev().map(|row| row.index()).collect();
    assert_eq!(backward, [2, 1, 0], "Reversed rows should run bottom to top.");

    assert_eq!(format!("{:?}", grid.row(1).unwrap()), "Row 1: [\"c\", \"d\"]");
}
