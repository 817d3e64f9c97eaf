use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Columns {
    #[default]
    One,
    Two,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unsupported column count {0}, expected 1 or 2")]
pub struct ColumnsError(pub u8);

impl TryFrom<u8> for Columns {
    type Error = ColumnsError;

    fn try_from(count: u8) -> Result<Self, Self::Error> {
        match count {
            1 => Ok(Columns::One),
            2 => Ok(Columns::Two),
            other => Err(ColumnsError(other)),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum ColumnSplit<'a, T> {
    Single(&'a [T]),
    Pair(&'a [T], &'a [T]),
}

/// Splits `items` into columns. With two columns the left side takes the
/// extra item when the length is odd.
pub fn split_columns<T>(items: &[T], columns: Columns) -> ColumnSplit<'_, T> {
    match columns {
        Columns::One => ColumnSplit::Single(items),
        Columns::Two => {
            let (left, right) = items.split_at(items.len().div_ceil(2));
            ColumnSplit::Pair(left, right)
        }
    }
}

/// The sequence followed by itself, for seamless marquee loops.
pub fn looped<T>(items: &[T]) -> impl Iterator<Item = &T> {
    items.iter().chain(items.iter())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_columns_partition_every_length() {
        let source: Vec<u32> = (0..12).collect();
        for n in 0..=source.len() {
            let items = &source[..n];
            match split_columns(items, Columns::Two) {
                ColumnSplit::Pair(left, right) => {
                    assert_eq!(left.len() + right.len(), n);
                    assert_eq!(left.len(), n.div_ceil(2));
                    assert_eq!([left, right].concat(), items.to_vec());
                }
                ColumnSplit::Single(_) => panic!("expected a pair for n={}", n),
            }
        }
    }

    #[test]
    fn edge_lengths() {
        let empty: [&str; 0] = [];
        assert_eq!(split_columns(&empty, Columns::Two), ColumnSplit::Pair(&empty[..], &empty[..]));
        let one = ["Warwick"];
        assert_eq!(split_columns(&one, Columns::Two), ColumnSplit::Pair(&one[..], &empty[..]));
    }

    #[test]
    fn one_column_is_identity() {
        let items = ["a", "b", "c"];
        assert_eq!(split_columns(&items, Columns::One), ColumnSplit::Single(&items[..]));
        let first = split_columns(&items, Columns::One);
        assert_eq!(first, split_columns(&items, Columns::One));
    }

    #[test]
    fn column_count_from_number() {
        assert_eq!(Columns::try_from(1), Ok(Columns::One));
        assert_eq!(Columns::try_from(2), Ok(Columns::Two));
        assert_eq!(Columns::try_from(3), Err(ColumnsError(3)));
        assert_eq!(Columns::try_from(0), Err(ColumnsError(0)));
    }

    #[test]
    fn looped_repeats_once() {
        let countries = ["UK", "USA"];
        let track: Vec<_> = looped(&countries).copied().collect();
        assert_eq!(track, vec!["UK", "USA", "UK", "USA"]);
    }
}
