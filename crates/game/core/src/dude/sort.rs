use std::cmp::Ordering;

use super::Dude;

/// Roster column a list of dudes can be ordered by.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::EnumIter,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum SortProperty {
    #[default]
    Name,
    Profession,
    Level,
}

/// Returns the dudes ordered by `property`, ascending, with the name as
/// tie breaker. The input order is kept for full ties.
pub fn sort_dudes(dudes: &[Dude], property: SortProperty) -> Vec<&Dude> {
    let by_name = |a: &Dude, b: &Dude| a.name().cmp(b.name());

    let mut sorted: Vec<&Dude> = dudes.iter().collect();
    sorted.sort_by(|a, b| {
        let primary = match property {
            SortProperty::Name => Ordering::Equal,
            SortProperty::Profession => a.profession().to_string().cmp(&b.profession().to_string()),
            SortProperty::Level => a.level().cmp(&b.level()),
        };
        primary.then_with(|| by_name(a, b))
    });
    sorted
}
