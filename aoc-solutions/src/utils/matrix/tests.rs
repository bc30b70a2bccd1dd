//! Tests for the matrix module.

use proptest::prelude::*;

use super::*;

const SCHEMATIC: [&str; 10] = [
    "467..114..",
    "...*......",
    "..35..6330",
    "0.....#...",
    "617*......",
    ".....+.58.",
    "..592.....",
    "......755.",
    "...$.*....",
    ".664.598..",
];

fn schematic() -> Matrix<char> {
    Matrix::from_lines(SCHEMATIC).unwrap()
}

fn view(column: isize, row: isize, columns: isize, rows: isize) -> View {
    View::new(Offset::new(column, row), Size::new(columns, rows))
}

#[test]
fn test_new_fills_every_element() {
    let m = Matrix::new(Size::new(4, 3), 7u8);
    assert_eq!(m.len(), 12);
    assert!(m.iter().all(|v| *v == 7));
}

#[test]
fn test_from_elements_rejects_count_mismatch() {
    let result = Matrix::from_elements(Size::new(3, 3), 0..8);
    assert!(matches!(result, Err(MatrixError::InvalidSourceData(_))));
}

#[test]
fn test_index_lookup() {
    let m = schematic();
    assert_eq!(m[m.index(Offset::new(0, 0))], '4');
    assert_eq!(m[m.index(Offset::new(1, 0))], '6');
    assert_eq!(m[m.index(Offset::new(2, 2))], '3');
    assert_eq!(m[m.index(Offset::new(3, 2))], '5');
}

#[test]
fn test_index_advanced_by_wraps_to_next_row() {
    let m = schematic();
    let i0 = m.index(Offset::new(8, 2));
    assert_eq!(m[i0], '3');
    let i1 = i0.advanced_by(1);
    assert_eq!(m[i1], '0');
    let i2 = i1.advanced_by(1);
    assert_eq!(m[i2], '0');
    let i3 = i2.advanced_by(1);
    assert_eq!(m[i3], '.');
}

#[test]
fn test_iter_matches_source_text() {
    let m = schematic();
    let expected: Vec<char> = SCHEMATIC.iter().flat_map(|line| line.chars()).collect();
    assert_eq!(m.iter().copied().collect::<Vec<_>>(), expected);
    assert_eq!(m.iter().len(), 100);
}

#[test]
fn test_slice_lookup() {
    let m = schematic();
    let s = m.slice(view(2, 0, 2, 2));
    assert_eq!(s.at(Offset::new(0, 0)), &'7');
    assert_eq!(s.at(Offset::new(1, 0)), &'.');
    assert_eq!(s.at(Offset::new(0, 1)), &'.');
    assert_eq!(s.at(Offset::new(1, 1)), &'*');
    assert!(s.shares_storage_with(&m));
}

#[test]
fn test_slice_index_advances_within_slice() {
    let m = schematic();
    let s = m.slice(view(2, 0, 2, 2));
    let i0 = s.start_index();
    let visited: Vec<char> = (0..4).map(|n| m[i0.advanced_by(n)]).collect();
    assert_eq!(visited, vec!['7', '.', '.', '*']);
    assert_eq!(i0.advanced_by(4), s.end_index());
}

#[test]
fn test_slice_iter() {
    let m = schematic();
    let s = m.slice(view(2, 0, 2, 2));
    assert_eq!(s.iter().copied().collect::<String>(), "7..*");
}

#[test]
fn test_rows_and_columns() {
    let m = schematic();
    assert_eq!(m.rows().len(), 10);
    assert_eq!(m.rows().next().unwrap().text(), "467..114..");
    assert_eq!(m.rows().next_back().unwrap().text(), ".664.598..");
    assert_eq!(m.columns().next().unwrap().text(), "4..06.....");
    assert_eq!(m.column(9).text(), "..0.......");

    // Restartable: a second pass yields the same rows.
    let first: Vec<String> = m.rows().map(|r| r.text()).collect();
    let second: Vec<String> = m.rows().map(|r| r.text()).collect();
    assert_eq!(first, second);
    assert_eq!(first, SCHEMATIC);
}

#[test]
fn test_offset_moves_view() {
    let m = schematic();
    let base = m.slice(view(2, 2, 3, 3));
    let moved = base.offset(Offset::new(1, 1));
    assert_eq!(moved.view(), view(3, 3, 3, 3));
    assert_eq!(moved.offset(Offset::new(-1, -1)), base);
    assert_eq!(base.to_string(), "35.\n...\n7*.");
}

#[test]
fn test_offset_edges_grows_around_slice() {
    let m = schematic();
    let grown = m.slice(view(2, 2, 3, 3)).offset_edges(Edges::ONE);
    assert_eq!(grown.view(), view(1, 1, 5, 5));
}

#[test]
fn test_clamped_slices() {
    let m = schematic();
    let top_left = m.slice_clamped(view(-2, -1, 4, 3));
    assert_eq!(top_left.view(), view(0, 0, 2, 2));
    assert_eq!(top_left.to_string(), "46\n..");

    let bottom_right = m.slice_clamped(view(8, 9, 3, 3));
    assert_eq!(bottom_right.view(), view(8, 9, 2, 1));

    let outside = m.offset_clamped(Offset::new(20, 0));
    assert!(outside.is_empty());
}

#[test]
fn test_offset_edges_clamped_on_non_square_grid() {
    let m = Matrix::from_lines(["ab", "cd", "ef", "gh"]).unwrap();
    let grown = m.row(2).offset_edges_clamped(Edges::ONE);
    assert_eq!(grown.view(), view(0, 1, 2, 3));
    assert_eq!(grown.to_string(), "cd\nef\ngh");
}

#[test]
fn test_get_is_bounds_checked_against_view() {
    let m = schematic();
    let s = m.slice(view(2, 0, 2, 2));
    assert_eq!(s.get(Offset::new(1, 1)), Some(&'*'));
    assert_eq!(s.get(Offset::new(2, 0)), None);
    assert_eq!(s.get(Offset::new(0, -1)), None);
}

#[test]
#[should_panic(expected = "exceeds storage")]
fn test_unclamped_slice_past_storage_panics() {
    schematic().slice(view(8, 9, 3, 3));
}

#[test]
#[should_panic(expected = "starts before the storage origin")]
fn test_unclamped_edges_at_border_panics() {
    schematic().row(0).offset_edges(Edges::ONE);
}

#[test]
#[should_panic(expected = "negative dimension")]
fn test_negative_size_panics() {
    schematic().slice(view(0, 0, -1, 2));
}

fn sum_part_numbers(grid: &Matrix<char>) -> u32 {
    grid.continuous_matrices_satisfying(|c| c.is_ascii_digit())
        .into_iter()
        .filter(|number| {
            number
                .offset_edges_clamped(Edges::ONE)
                .iter()
                .any(|c| *c != '.' && !c.is_ascii_digit())
        })
        .map(|number| number.parse_number::<u32>().unwrap())
        .sum()
}

fn sum_gear_ratios(grid: &Matrix<char>) -> u32 {
    let numbers = grid.continuous_matrices_satisfying(|c| c.is_ascii_digit());
    grid.continuous_views_satisfying(|c| *c == '*')
        .into_iter()
        .map(|gear| gear.offset_by_edges(Edges::ONE))
        .filter_map(|area| {
            let adjacent: Vec<_> = numbers.iter().filter(|n| area.overlaps(&n.view())).collect();
            match adjacent.as_slice() {
                [a, b] => Some(a.parse_number::<u32>().unwrap() * b.parse_number::<u32>().unwrap()),
                _ => None,
            }
        })
        .sum()
}

#[test]
fn test_schematic_part_numbers() {
    assert_eq!(sum_part_numbers(&schematic()), 4361);
}

#[test]
fn test_schematic_gear_ratios() {
    assert_eq!(sum_gear_ratios(&schematic()), 467835);
}

fn sized_grid() -> impl Strategy<Value = Matrix<u16>> {
    (1isize..12, 1isize..12).prop_map(|(columns, rows)| {
        Matrix::from_elements(Size::new(columns, rows), 0..(columns * rows) as u16).unwrap()
    })
}

proptest! {
    #[test]
    fn prop_slicing_is_associative(
        m in sized_grid(),
        (c1, r1, c2, r2) in (0isize..4, 0isize..4, 0isize..4, 0isize..4)
    ) {
        let size = m.size();
        prop_assume!(c1 + c2 < size.columns && r1 + r2 < size.rows);
        let outer = view(c1, r1, size.columns - c1, size.rows - r1);
        let inner = view(c2, r2, size.columns - c1 - c2, size.rows - r1 - r2);

        let stepwise = m.slice(outer).slice(inner);
        let composed = m.slice(View::new(outer.offset + inner.offset, inner.size));
        prop_assert_eq!(stepwise.view(), composed.view());
        prop_assert_eq!(stepwise, composed);
    }

    #[test]
    fn prop_edges_round_trip(m in sized_grid(), amount in 0isize..3) {
        let size = m.size();
        prop_assume!(size.columns > 2 * amount && size.rows > 2 * amount);
        let shrunk = m.offset_edges(-Edges::uniform(amount));
        let restored = shrunk.offset_edges(Edges::uniform(amount));
        prop_assert_eq!(restored.view(), m.view());
    }

    #[test]
    fn prop_clamped_slice_never_exceeds_storage(
        m in sized_grid(),
        v in (-15isize..15, -15isize..15, 0isize..20, 0isize..20)
    ) {
        let clamped = m.slice_clamped(view(v.0, v.1, v.2, v.3));
        let size = clamped.size();
        prop_assert!(size.columns >= 0 && size.rows >= 0);
        prop_assert!(size.columns <= m.size().columns && size.rows <= m.size().rows);
        prop_assert_eq!(clamped.iter().count(), clamped.len());
    }

    #[test]
    fn prop_unclamped_out_of_bounds_panics(m in sized_grid(), overshoot in 1isize..5) {
        let size = m.size();
        let result = std::panic::catch_unwind(|| {
            m.slice(view(0, 0, size.columns + overshoot, size.rows));
        });
        prop_assert!(result.is_err());
    }
}
