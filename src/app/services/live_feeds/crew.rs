//! Crew roster grouping

use indexmap::IndexMap;

use crate::app::models::{CrewMember, CrewRoster};

/// Group people by spacecraft
///
/// Crafts keep first-seen order and names keep their order within a craft.
/// When the feed omits `number` the count is the number of people listed.
pub fn group_crew(number: Option<usize>, people: impl IntoIterator<Item = CrewMember>) -> CrewRoster {
    let mut crafts: IndexMap<String, Vec<String>> = IndexMap::new();
    let mut listed = 0;

    for CrewMember { name, craft } in people {
        crafts.entry(craft).or_default().push(name);
        listed += 1;
    }

    CrewRoster {
        count: number.unwrap_or(listed),
        crafts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_crew_preserves_order() {
        let people = vec![
            CrewMember::new("A", "ISS"),
            CrewMember::new("B", "Tiangong"),
            CrewMember::new("C", "ISS"),
        ];
        let roster = group_crew(Some(3), people);

        assert_eq!(roster.count, 3);
        assert_eq!(
            roster.crafts.keys().collect::<Vec<_>>(),
            vec!["ISS", "Tiangong"]
        );
        assert_eq!(roster.crew_of("ISS").unwrap(), ["A", "C"]);
        assert_eq!(roster.crew_of("Tiangong").unwrap(), ["B"]);
    }

    #[test]
    fn test_missing_number_counts_people() {
        let roster = group_crew(None, vec![CrewMember::new("A", "ISS")]);
        assert_eq!(roster.count, 1);
    }

    #[test]
    fn test_reported_number_is_kept() {
        let roster = group_crew(Some(10), vec![CrewMember::new("A", "ISS")]);
        assert_eq!(roster.count, 10);
    }

    #[test]
    fn test_empty_roster() {
        let roster = group_crew(None, Vec::new());
        assert!(roster.is_empty());
    }
}
