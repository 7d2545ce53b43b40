//! Integration tests for Flow Core.

use flow_core::prelude::*;
use test_case::test_case;

#[test_case(vec![1, 2, 3, 4] => Ok(10) ; "four elements")]
#[test_case(vec![7] => Ok(7) ; "single element")]
#[test_case(vec![] => Err(Error::EmptyReduction) ; "empty")]
fn test_reduce_sum(values: Vec<i32>) -> Result<i32> {
    over(values).reduce(|a, b| a + b)
}

#[test_case(vec![0, 1, 2, 3, 4] => vec![0, 2, 4] ; "mixed")]
#[test_case(vec![1, 3, 5] => Vec::<i32>::new() ; "no evens")]
#[test_case(vec![] => Vec::<i32>::new() ; "empty")]
fn test_filter_even(values: Vec<i32>) -> Vec<i32> {
    over(values).filter(|x| x % 2 == 0).to_vec()
}

#[test_case(3, 10 => vec![0, 1, 4] ; "prefix")]
#[test_case(0, 10 => Vec::<usize>::new() ; "take nothing")]
#[test_case(5, 2 => vec![0, 1] ; "past the bound")]
fn test_take_squares(n: usize, bound: usize) -> Vec<usize> {
    by_indexing(|i| i * i, bound).take(n).to_vec()
}

#[test]
fn test_zip_letters_with_numbers() {
    let pairs = over(vec!["a", "b", "c"]).zip(vec![1, 2]).to_vec();
    assert_eq!(pairs, vec![("a", 1), ("b", 2)]);
}

#[test]
fn test_empty_cursor_is_exhausted() {
    let mut cursor = empty::<String>();
    assert!(!cursor.has_next());
    assert_eq!(cursor.next(), Err(Error::Exhausted));
    assert_eq!(cursor.skip(), Err(Error::Exhausted));
    assert_eq!(cursor.exact_size(), Some(0));
}

#[test]
fn test_fold_with_and_without_identity() {
    assert_eq!(empty::<i32>().reduce(|a, b| a + b), Err(Error::EmptyReduction));
    assert_eq!(empty::<i32>().fold(0, |a, b| a + b), 0);
}

#[test_case(0 ; "zero")]
#[test_case(-1 ; "negative")]
fn test_until_without_positive_bound_is_empty(bound: i32) {
    let mut range = until(bound);
    assert_eq!(range.exact_size(), Some(0));
    assert_eq!(range.next(), Err(Error::Exhausted));
}

#[test_case(4, 1 ; "reversed bounds")]
#[test_case(2, 2 ; "equal bounds")]
fn test_between_without_span_is_empty(low: i32, high: i32) {
    assert!(between(low, high).to_vec().is_empty());
}

#[test]
fn test_range_arguments_without_meaning_fail() {
    assert!(matches!(between_step(0, 10, 0), Err(Error::InvalidArgument(_))));
    assert!(matches!(partition(0.0, 1.0, 0), Err(Error::InvalidArgument(_))));
    assert_eq!(between_step(5, 0, 1).map(Cursor::to_vec), Ok(Vec::new()));
}

#[test]
fn test_long_pipeline_size_tracking() {
    let mut cursor = by_indexing(|i| i as i64, 20)
        .map(|x| x * 3)
        .drop(2)
        .take(10)
        .enumerate();
    assert_eq!(cursor.exact_size(), Some(10));
    assert_eq!(cursor.next(), Ok((0, 6)));
    assert_eq!(cursor.exact_size(), Some(9));
    assert_eq!(cursor.count(), 9);
}

#[test]
fn test_numeric_kinds_share_operators() {
    let int_total = ints(&[1, 2, 3]).accumulate(|a, b| a + b).sum();
    let long_total = longs(&[1, 2, 3]).accumulate(|a, b| a + b).sum();
    let double_total = doubles(&[1.0, 2.0, 3.0]).accumulate(|a, b| a + b).sum();
    assert_eq!(int_total, 10);
    assert_eq!(long_total, 10);
    assert!((double_total - 10.0).abs() < f64::EPSILON);
}

#[test]
fn test_ranges_compose() {
    let evens = until(10).filter(|x| x % 2 == 0).to_vec();
    assert_eq!(evens, vec![0, 2, 4, 6, 8]);

    let points = partition(0.0, 1.0, 4).map(|p| p.to_vec());
    assert_eq!(points, Ok(vec![0.0, 0.25, 0.5, 0.75, 1.0]));
}

#[test]
fn test_flatten_all_nested_vectors() {
    let flat = flatten_all(vec![vec!["a"], vec![], vec!["b", "c"]]).to_vec();
    assert_eq!(flat, vec!["a", "b", "c"]);
}

#[test]
fn test_group_then_summarize() {
    let words = vec!["apple", "bean", "avocado", "beet", "cherry"];
    let groups = over(words).group_by(|w| w.chars().next());
    let summary: Vec<(Option<char>, usize)> =
        collection(&groups).map(|(k, v)| (*k, v.len())).to_vec();
    assert_eq!(
        summary,
        vec![(Some('a'), 2), (Some('b'), 2), (Some('c'), 1)]
    );
}

#[test]
fn test_wrap_foreign_iterator() {
    let mut cursor = wrap("a,b,c".split(','));
    assert!(cursor.has_next());
    assert_eq!(cursor.next(), Ok("a"));
    assert_eq!(cursor.to_vec(), vec!["b", "c"]);
}

#[test]
fn test_elements_feed_std_adapters() {
    let doubled: Vec<i32> = ints(&[1, 2, 3]).elements().map(|x| x * 2).collect();
    assert_eq!(doubled, vec![2, 4, 6]);
}

#[test]
fn test_boxed_pipelines_are_interchangeable() {
    let pipelines: Vec<Box<dyn Cursor<Item = i32>>> = vec![
        ints(&[1, 2, 3]).boxed(),
        ints(&[5, 6]).filter(|x| *x > 5).boxed(),
        empty::<i32>().boxed(),
    ];
    let sizes: Vec<usize> = pipelines.into_iter().map(Cursor::count).collect();
    assert_eq!(sizes, vec![3, 1, 0]);
}
