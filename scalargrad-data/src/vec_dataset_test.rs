// scalargrad-data/src/vec_dataset_test.rs

use super::*;

#[test]
fn test_vec_dataset_new() {
    let data = vec![1, 2, 3, 4, 5];
    let dataset = VecDataset::new(data.clone());
    assert_eq!(dataset.len(), 5);
    assert_eq!(dataset.as_slice(), &data[..]);
}

#[test]
fn test_vec_dataset_get_valid_index() {
    let dataset = VecDataset::new(vec![10, 20, 30]);
    assert_eq!(dataset.get(0), Ok(10));
    assert_eq!(dataset.get(1), Ok(20));
    assert_eq!(dataset.get(2), Ok(30));
}

#[test]
fn test_vec_dataset_get_invalid_index() {
    let dataset: VecDataset<i32> = VecDataset::new(vec![10, 20, 30]);
    match dataset.get(3) {
        Err(ScalarGradError::IndexOutOfBounds { index, len }) => {
            assert_eq!(index, 3);
            assert_eq!(len, 3);
        }
        other => panic!("Expected IndexOutOfBounds error, got {:?}", other),
    }
}

#[test]
fn test_vec_dataset_empty() {
    let dataset: VecDataset<i32> = VecDataset::new(Vec::new());
    assert_eq!(dataset.len(), 0);
    assert!(dataset.is_empty());
    assert!(dataset.get(0).is_err());
}

#[test]
fn test_vec_dataset_iter_and_from() {
    let dataset: VecDataset<&str> = vec!["a", "b", "c"].into();
    let joined: String = dataset.iter().copied().collect();
    assert_eq!(joined, "abc");
    assert_eq!(dataset.into_vec(), vec!["a", "b", "c"]);
}
