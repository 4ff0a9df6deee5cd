use array_ext::{
    comparators::{LengthComparator, LineComparator, OccurrenceComparator},
    operations::{filter, search, search_by, search_range, sort_by, sort_lines, transform, Line},
    ports::{NaturalOrder, Reversed},
    predicates::{ContainsDigit, EvenNumber, GreaterThan, PalindromeNumber},
    transformers::{BitEncoder, NumeralBaseCodec, WordTranscriber},
    ArrayError, SequenceExt,
};

fn strings(values: &[Option<&str>]) -> Vec<Option<String>> {
    values.iter().map(|value| value.map(str::to_string)).collect()
}

#[test]
fn test_filter_scenarios() {
    let values = [24, 42, -4444, -4, 4, -4, 22, -788];
    assert_eq!(
        filter(Some(&values[..]), Some(&ContainsDigit::new(4).unwrap())).unwrap(),
        vec![24, 42, -4444, -4, 4, -4]
    );

    let values = [1, 2, -5, 10, 15, 6, 7];
    assert_eq!(
        values.filter_by(&GreaterThan::new(-5)).unwrap(),
        vec![1, 2, 10, 15, 6, 7]
    );

    let values = [123, 3003, 12, 13, 14, 44144, 10101];
    assert_eq!(
        values.filter_by(&PalindromeNumber).unwrap(),
        vec![3003, 44144, 10101]
    );

    let values = [12, 7, 10, 0, 3, -8, -9];
    assert_eq!(values.filter_by(&EvenNumber).unwrap(), vec![12, 10, 0, -8]);
}

#[test]
fn test_filter_argument_checks() {
    let empty: [i32; 0] = [];
    assert_eq!(
        filter(None::<&[i32]>, Some(&PalindromeNumber)),
        Err(ArrayError::NullArgument("seq"))
    );
    assert_eq!(
        filter(Some(&empty[..]), Some(&PalindromeNumber)),
        Err(ArrayError::EmptyInput("seq"))
    );
    assert_eq!(
        filter(Some(&[2, 5][..]), None::<&EvenNumber>),
        Err(ArrayError::NullArgument("predicate"))
    );
}

#[test]
fn test_transform_to_bits() {
    let values = [4294967295.0, f64::MIN, f64::from_bits(1), f64::from_bits(0xFFF8_0000_0000_0000), -0.0];

    let bits: Vec<String> = transform(Some(&values[..]), Some(&BitEncoder)).unwrap();

    assert_eq!(
        bits,
        vec![
            "0100000111101111111111111111111111111111111000000000000000000000",
            "1111111111101111111111111111111111111111111111111111111111111111",
            "0000000000000000000000000000000000000000000000000000000000000001",
            "1111111111111000000000000000000000000000000000000000000000000000",
            "1000000000000000000000000000000000000000000000000000000000000000",
        ]
    );
}

#[test]
fn test_transform_to_russian_words() {
    let russian = WordTranscriber::russian();

    let words: Vec<String> =
        transform(Some(&[1.21, 1E-10, 2.0][..]), Some(&russian)).unwrap();
    assert_eq!(
        words,
        vec!["один точка два один", "один экспонента минус один ноль", "два"]
    );

    let words: Vec<String> =
        transform(Some(&[-5.05, 9.99, f64::NAN][..]), Some(&russian)).unwrap();
    assert_eq!(
        words,
        vec!["минус пять точка ноль пять", "девять точка девять девять", "Не число"]
    );

    let words: Vec<String> = transform(
        Some(&[f64::INFINITY, f64::NEG_INFINITY][..]),
        Some(&russian),
    )
    .unwrap();
    assert_eq!(words, vec!["Плюс бесконечность", "Минус бесконечность"]);
}

#[test]
fn test_transform_to_english_words() {
    let english = WordTranscriber::english();

    let words: Vec<String> = [22.02, f64::NAN, 0.0].transform_with(&english).unwrap();
    assert_eq!(words, vec!["two two point zero two", "Not a number", "zero"]);

    let words: Vec<String> = [330.0, f64::INFINITY, f64::NEG_INFINITY]
        .transform_with(&english)
        .unwrap();
    assert_eq!(
        words,
        vec!["three three zero", "Positive Infinity", "Negative Infinity"]
    );
}

#[test]
fn test_transform_numerals_aborts_on_first_failure() {
    let codec = NumeralBaseCodec::new(3).unwrap();
    let digits = vec!["202".to_string(), "13".to_string(), "1".to_string()];

    let result: Result<Vec<i32>, ArrayError> = transform(Some(digits.as_slice()), Some(&codec));

    assert_eq!(result, Err(ArrayError::InvalidDigit { digit: '3', base: 3 }));
}

#[test]
fn test_sort_strings() {
    let values = strings(&[Some("test"), Some("test1010"), Some("1"), Some("{2}")]);
    assert_eq!(
        sort_by(Some(values.as_slice()), Some(&LengthComparator::ascending())).unwrap(),
        strings(&[Some("1"), Some("{2}"), Some("test"), Some("test1010")])
    );

    let values = strings(&[Some("let"), Some("0"), Some("1"), Some("testtest")]);
    assert_eq!(
        values.sorted_with(&LengthComparator::descending()).unwrap(),
        strings(&[Some("testtest"), Some("let"), Some("0"), Some("1")])
    );

    let values = strings(&[Some("temp"), Some("test"), Some("eeee"), Some("e"), Some("123")]);
    assert_eq!(
        values.sorted_with(&OccurrenceComparator::descending('e')).unwrap(),
        strings(&[Some("eeee"), Some("temp"), Some("test"), Some("e"), Some("123")])
    );
}

#[test]
fn test_sort_argument_checks() {
    let values = strings(&[Some("hello")]);
    assert_eq!(
        sort_by(Some(values.as_slice()), None::<&LengthComparator>),
        Err(ArrayError::NullArgument("comparator"))
    );
    assert_eq!(
        sort_by(None::<&[Option<String>]>, Some(&LengthComparator::ascending())),
        Err(ArrayError::NullArgument("seq"))
    );
}

#[test]
fn test_sort_jagged_desc_by_sum() {
    let lines: Vec<Line> = vec![
        Some(vec![100]),
        Some(vec![1050, 10, -1050]),
        None,
        Some(vec![1, 2, 3]),
        None,
    ];

    let sorted = sort_lines(Some(lines.as_slice()), Some(&LineComparator::desc_by_sum())).unwrap();

    assert_eq!(
        sorted,
        vec![
            Some(vec![100]),
            Some(vec![1050, 10, -1050]),
            Some(vec![1, 2, 3]),
            None,
            None,
        ]
    );
}

#[test]
fn test_search_scenarios() {
    assert_eq!(search(Some(&[1, 2, 3, 4][..]), &4).unwrap(), Some(3));
    assert_eq!(search(Some(&[1, 5, 7, 9, 1][..]), &10).unwrap(), None);

    let descending = [9, 7, 5, 3, 1];
    assert_eq!(
        search_by(Some(&descending[..]), &3, Some(&Reversed(NaturalOrder))).unwrap(),
        Some(3)
    );

    let words = ["apple", "banana", "cherry", "damson"];
    assert_eq!(
        search_range(&words, 1, 2, &"cherry", Some(&NaturalOrder)).unwrap(),
        Some(2)
    );
    assert_eq!(
        search_range(&words, 1, 2, &"damson", Some(&NaturalOrder)).unwrap(),
        None
    );
}

#[test]
fn test_search_requires_comparator() {
    let values = [1, 2, 3];
    assert_eq!(
        search_by(Some(&values[..]), &2, None::<&NaturalOrder>),
        Err(ArrayError::ComparatorRequired)
    );
}

#[test]
fn test_pipeline_decode_filter_sort_search() {
    let digits: Vec<String> = ["1F", "A", "FF", "3", "C"].iter().map(|s| s.to_string()).collect();
    let codec = NumeralBaseCodec::new(16).unwrap();

    let numbers: Vec<i32> = digits.transform_with(&codec).unwrap();
    let large = numbers.filter_by(&GreaterThan::new(9)).unwrap();
    let sorted = large.sorted_with(&NaturalOrder).unwrap();

    assert_eq!(sorted, vec![10, 12, 31, 255]);
    assert_eq!(search(Some(sorted.as_slice()), &31).unwrap(), Some(2));
}
