use std::cmp::Ordering;

use strum::{EnumString, IntoStaticStr};

use crate::models::Destination;

pub type Comparator = fn(&Destination, &Destination) -> Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDir {
    #[default]
    Asc,
    Desc,
}

impl SortDir {
    #[inline]
    pub fn toggle(self) -> Self {
        match self {
            SortDir::Asc => SortDir::Desc,
            SortDir::Desc => SortDir::Asc,
        }
    }
}

/// Columns the grid can be sorted by. Parsed from the column id, e.g. `"Distance"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, IntoStaticStr)]
pub enum SortField {
    Name,
    Distance,
    Price,
}

impl SortField {
    pub fn comparator(self) -> Comparator {
        match self {
            SortField::Name => |a: &Destination, b: &Destination| compare_names(&a.name, &b.name),
            SortField::Distance => {
                |a: &Destination, b: &Destination| a.distance.cmp(&b.distance)
            }
            SortField::Price => |a: &Destination, b: &Destination| a.price.cmp(&b.price),
        }
    }
}

/// Case-insensitive order, ordinal on ties so the order stays total
fn compare_names(a: &str, b: &str) -> Ordering {
    let folded = a.chars().flat_map(char::to_lowercase);
    folded.cmp(b.chars().flat_map(char::to_lowercase)).then_with(|| a.cmp(b))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub field: SortField,
    pub dir: SortDir,
}

impl SortSpec {
    #[inline]
    pub fn ordering(&self, a: &Destination, b: &Destination) -> Ordering {
        let ord = (self.field.comparator())(a, b);
        match self.dir {
            SortDir::Asc => ord,
            SortDir::Desc => ord.reverse(),
        }
    }
}

/// Header click state: clicking the same column again flips the direction,
/// clicking another column starts ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HeaderSort {
    last: Option<SortField>,
    dir: SortDir,
}

impl HeaderSort {
    pub fn click(&mut self, field: SortField) -> SortSpec {
        if self.last == Some(field) {
            self.dir = self.dir.toggle();
        } else {
            self.dir = SortDir::Asc;
            self.last = Some(field);
        }
        SortSpec { field, dir: self.dir }
    }

    pub fn current(&self) -> Option<SortSpec> {
        self.last.map(|field| SortSpec { field, dir: self.dir })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_parse_field() {
        assert_eq!("Name".parse::<SortField>(), Ok(SortField::Name));
        assert_eq!("Distance".parse::<SortField>(), Ok(SortField::Distance));
        assert_eq!("Price".parse::<SortField>(), Ok(SortField::Price));
        assert!("price".parse::<SortField>().is_err());
        assert!("Rating".parse::<SortField>().is_err());
        assert_eq!(<&'static str>::from(SortField::Distance), "Distance");
    }

    #[test]
    fn test_click_toggles_same_column() {
        let mut sort = HeaderSort::default();
        assert_eq!(sort.current(), None);

        assert_eq!(sort.click(SortField::Price).dir, SortDir::Asc);
        assert_eq!(sort.click(SortField::Price).dir, SortDir::Desc);
        assert_eq!(sort.click(SortField::Price).dir, SortDir::Asc);
        assert_eq!(
            sort.current(),
            Some(SortSpec { field: SortField::Price, dir: SortDir::Asc })
        );
    }

    #[test]
    fn test_click_other_column_resets_to_asc() {
        let mut sort = HeaderSort::default();
        sort.click(SortField::Name);
        assert_eq!(sort.click(SortField::Name).dir, SortDir::Desc);

        let spec = sort.click(SortField::Distance);
        assert_eq!(spec, SortSpec { field: SortField::Distance, dir: SortDir::Asc });
    }

    #[test]
    fn test_comparators() {
        let a = Destination::new("Berlin", 400, crate::models::Price::from_units(800));
        let b = Destination::new("Paris", 200, crate::models::Price::from_units(400));

        assert_eq!((SortField::Name.comparator())(&a, &b), Ordering::Less);
        assert_eq!((SortField::Distance.comparator())(&a, &b), Ordering::Greater);
        assert_eq!((SortField::Price.comparator())(&a, &b), Ordering::Greater);

        let desc = SortSpec { field: SortField::Name, dir: SortDir::Desc };
        assert_eq!(desc.ordering(&a, &b), Ordering::Greater);
    }

    #[test]
    fn test_names_ignore_case() {
        let mut names = vec!["paris", "Berlin", "amsterdam", "berlin"];
        names.sort_by(|a, b| compare_names(a, b));
        assert_eq!(names, vec!["amsterdam", "Berlin", "berlin", "paris"]);
    }
}
