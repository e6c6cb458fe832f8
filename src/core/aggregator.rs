use crate::domain::model::{Declarations, GroupRegistry};
use std::collections::{BTreeMap, BTreeSet};

/// Mutable accumulator folded over every file's declarations, then frozen
/// into a [`GroupRegistry`] by [`RegistryBuilder::finish`].
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    groups: BTreeMap<String, BTreeSet<String>>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merges one file's result. Cases from different files under the same
    /// group are unioned; nothing is treated as a conflict.
    pub fn absorb(&mut self, declarations: &Declarations) {
        for (group, cases) in declarations.iter() {
            self.groups
                .entry(group.to_string())
                .or_default()
                .extend(cases.iter().cloned());
        }
    }

    pub fn finish(self) -> GroupRegistry {
        let groups = self
            .groups
            .into_iter()
            .map(|(group, cases)| (group, cases.into_iter().collect()))
            .collect();
        GroupRegistry::from_sorted(groups)
    }
}

pub fn aggregate<'a, I>(results: I) -> GroupRegistry
where
    I: IntoIterator<Item = &'a Declarations>,
{
    results
        .into_iter()
        .fold(RegistryBuilder::new(), |mut builder, declarations| {
            builder.absorb(declarations);
            builder
        })
        .finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Declaration;

    fn group(name: &str) -> Declaration {
        Declaration::Group(name.to_string())
    }

    fn case(group: &str, case: &str) -> Declaration {
        Declaration::Case {
            group: group.to_string(),
            case: case.to_string(),
        }
    }

    fn cases(registry: &GroupRegistry, name: &str) -> Vec<String> {
        registry.cases(name).map(|c| c.to_vec()).unwrap_or_default()
    }

    #[test]
    fn test_merges_groups_across_files() {
        let file_a: Declarations = vec![group("Alpha"), case("Alpha", "one")].into_iter().collect();
        let file_b: Declarations = vec![group("Alpha"), group("Beta"), case("Alpha", "two")]
            .into_iter()
            .collect();

        let registry = aggregate([&file_a, &file_b]);

        let names: Vec<&str> = registry.group_names().collect();
        assert_eq!(names, vec!["Alpha", "Beta"]);
        assert_eq!(cases(&registry, "Alpha"), vec!["one", "two"]);
        assert!(cases(&registry, "Beta").is_empty());
    }

    #[test]
    fn test_deduplicates_and_sorts_cases() {
        let file_a: Declarations = vec![case("Cpu", "Return"), case("Cpu", "Call")]
            .into_iter()
            .collect();
        let file_b: Declarations = vec![case("Cpu", "Call"), case("Cpu", "Add")]
            .into_iter()
            .collect();

        let registry = aggregate([&file_a, &file_b]);

        assert_eq!(cases(&registry, "Cpu"), vec!["Add", "Call", "Return"]);
    }

    #[test]
    fn test_file_order_does_not_matter() {
        let file_a: Declarations = vec![group("Zeta"), case("Zeta", "b")].into_iter().collect();
        let file_b: Declarations = vec![case("Zeta", "a"), group("Eta")].into_iter().collect();

        assert_eq!(aggregate([&file_a, &file_b]), aggregate([&file_b, &file_a]));
    }

    #[test]
    fn test_sorting_is_byte_lexicographic() {
        let file: Declarations = vec![case("G", "b"), case("G", "B"), case("G", "a_1"), case("G", "a")]
            .into_iter()
            .collect();

        let registry = aggregate([&file]);

        assert_eq!(cases(&registry, "G"), vec!["B", "a", "a_1", "b"]);
    }

    #[test]
    fn test_empty_input() {
        let registry = aggregate(std::iter::empty::<&Declarations>());
        assert!(registry.is_empty());
    }
}
