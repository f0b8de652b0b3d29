//! The counting deck: the numbers one through ten.

use super::{Catalog, Item};

pub const RANGE: std::ops::RangeInclusive<u32> = 1..=10;

pub fn numbers_catalog() -> Catalog {
    let items = RANGE
        .map(|n| Item::new(format!("number-{n}"), n.to_string()))
        .collect();
    Catalog::new("numbers", "Numbers", items).expect("number range is non-empty")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_one_through_ten() {
        let catalog = numbers_catalog();
        assert_eq!(catalog.len(), 10);
        assert_eq!(catalog.item(0).unwrap().display, "1");
        assert_eq!(catalog.item(9).unwrap().display, "10");
    }

    #[test]
    fn digit_jump_resolves_zero_to_ten() {
        let catalog = numbers_catalog();
        assert_eq!(catalog.find_by_display("7"), Some(6));
        assert_eq!(catalog.find_by_display("10"), Some(9));
        assert_eq!(catalog.find_by_display("11"), None);
    }
}
