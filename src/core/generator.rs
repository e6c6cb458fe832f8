//! Renders Unity fixture runners from a [`GroupRegistry`].
//!
//! Output is a pure function of the registry: no timestamps and no
//! dependence on discovery order, so regenerating unchanged input yields
//! byte-identical files.

use crate::domain::model::{Artifact, ArtifactKind, GroupRegistry};
use std::path::Path;

pub const FIXTURE_HEADER: &str = "#include \"unity_fixture.h\"";
pub const AGGREGATOR_FILE_NAME: &str = "all_tests.c";

pub fn runner_file_name(group: &str) -> String {
    format!("test_{}_runner.c", group.to_lowercase())
}

/// Cases are emitted in the order given, which for registry groups is the
/// sorted order.
pub fn render_runner(group: &str, cases: &[String]) -> String {
    let mut lines = vec![
        FIXTURE_HEADER.to_string(),
        String::new(),
        format!("TEST_GROUP_RUNNER({}) {{", group),
    ];
    for case in cases {
        lines.push(format!("    RUN_TEST_CASE({}, {});", group, case));
    }
    lines.push("}".to_string());
    lines.push(String::new());
    lines.join("\n")
}

/// Groups are sorted here regardless of how they are passed in.
pub fn render_aggregator<'a, I>(groups: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let mut groups: Vec<&str> = groups.into_iter().collect();
    groups.sort_unstable();

    let mut lines = vec![
        FIXTURE_HEADER.to_string(),
        String::new(),
        "static void RunAllTests(void) {".to_string(),
    ];
    for group in groups {
        lines.push(format!("    RUN_TEST_GROUP({});", group));
    }
    lines.extend(
        [
            "}",
            "",
            "int main(int argc, const char *argv[]) {",
            "    return UnityMain(argc, argv, RunAllTests);",
            "}",
            "",
        ]
        .map(String::from),
    );
    lines.join("\n")
}

/// One runner per group, in group order, followed by the aggregator.
pub fn generate_artifacts(registry: &GroupRegistry, runners_dir: &Path) -> Vec<Artifact> {
    let mut artifacts: Vec<Artifact> = registry
        .groups()
        .map(|(group, cases)| Artifact {
            kind: ArtifactKind::Runner {
                group: group.to_string(),
            },
            path: runners_dir.join(runner_file_name(group)),
            contents: render_runner(group, cases),
        })
        .collect();

    artifacts.push(Artifact {
        kind: ArtifactKind::Aggregator,
        path: runners_dir.join(AGGREGATOR_FILE_NAME),
        contents: render_aggregator(registry.group_names()),
    });

    artifacts
}
