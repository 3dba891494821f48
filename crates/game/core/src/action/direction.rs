/// One of the four directions the whole board can be pushed.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!(Direction::from_str("LEFT").unwrap(), Direction::Left);
        assert_eq!(Direction::from_str("down").unwrap(), Direction::Down);
        assert!(Direction::from_str("sideways").is_err());
    }

    #[test]
    fn displays_snake_case() {
        assert_eq!(Direction::Up.to_string(), "up");
        assert_eq!(Direction::Right.as_ref(), "right");
    }

    #[test]
    fn iteration_matches_all() {
        let iterated: Vec<_> = Direction::iter().collect();
        assert_eq!(iterated, Direction::ALL.to_vec());
    }
}
