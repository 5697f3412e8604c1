use super::*;
use std::fs;
use std::path::{Path, PathBuf};

use logging::{DiagnosticEvent, InfoFlag, VerbosityConfig, drain_events, init};

fn tree() -> (tempfile::TempDir, PathBuf) {
    let temp = tempfile::tempdir().expect("tempdir");
    let root = temp.path().join("root");
    fs::create_dir_all(root.join("a/inner")).expect("create a/inner");
    fs::write(root.join("a/inner/file.txt"), b"data").expect("write nested file");
    fs::write(root.join("b.txt"), b"data").expect("write b");
    (temp, root)
}

#[test]
fn depth_tracks_open_directories() {
    let (_temp, root) = tree();
    let mut walker = WalkBuilder::new(&root)
        .sort_entries(true)
        .build()
        .expect("build walker");
    assert_eq!(walker.depth(), 1);

    let mut depths = Vec::new();
    while let WalkStep::Yielded(entry) = walker.next_entry() {
        depths.push((entry.depth(), walker.depth()));
    }
    // a, a/inner, a/inner/file.txt, b.txt
    assert_eq!(depths, vec![(1, 2), (2, 3), (3, 3), (1, 1)]);
    assert_eq!(walker.depth(), 0);
}

#[test]
fn relative_paths_are_relative_to_root() {
    let (_temp, root) = tree();
    let walker = WalkBuilder::new(&root)
        .sort_entries(true)
        .build()
        .expect("build walker");
    let relative: Vec<PathBuf> = walker
        .map(|entry| entry.expect("entry").relative_path().to_path_buf())
        .collect();
    assert_eq!(
        relative,
        vec![
            PathBuf::from("a"),
            PathBuf::from("a/inner"),
            PathBuf::from("a/inner/file.txt"),
            PathBuf::from("b.txt"),
        ]
    );
}

#[test]
fn current_follows_the_last_step() {
    let (_temp, root) = tree();
    let mut walker = WalkBuilder::new(&root)
        .sort_entries(true)
        .build()
        .expect("build walker");
    assert!(walker.current().is_none());

    let first = walker.next_entry().into_result().expect("step").expect("entry");
    assert_eq!(walker.current(), Some(&first));
    assert_eq!(walker.root(), root.as_path());
}

#[test]
fn walk_step_conversions() {
    assert!(WalkStep::Done.is_done());
    assert!(WalkStep::Done.into_result().is_none());

    let failed = WalkStep::Failed(WalkError::invalid_state("test"));
    assert!(!failed.is_done());
    assert!(matches!(failed.into_result(), Some(Err(_))));
}

#[test]
fn debug_output_names_root_and_depth() {
    let (_temp, root) = tree();
    let walker = Walker::new(&root).expect("build walker");
    let rendered = format!("{walker:?}");
    assert!(rendered.starts_with("Walker"));
    assert!(rendered.contains("depth: 1"));
}

#[test]
fn walker_records_diagnostics_when_enabled() {
    let (_temp, root) = tree();
    let mut config = VerbosityConfig::default();
    config.info.skip = 1;
    config.info.stats = 1;
    init(config);
    drain_events();

    let mut walker = WalkBuilder::new(&root)
        .sort_entries(true)
        .build()
        .expect("build walker");
    assert!(matches!(walker.next_entry(), WalkStep::Yielded(_)));
    walker.skip_directory().expect("skip a");
    while !walker.next_entry().is_done() {}

    let events = drain_events();
    init(VerbosityConfig::default());

    assert!(events.iter().any(|event| matches!(
        event,
        DiagnosticEvent::Info { flag: InfoFlag::Skip, message, .. } if message.contains("\"a\"")
    )));
    let stats = events
        .iter()
        .find(|event| matches!(event, DiagnosticEvent::Info { flag: InfoFlag::Stats, .. }))
        .expect("stats event");
    assert_eq!(
        stats.message(),
        "2 entries (1 directories), 0 failures, 1 skipped"
    );
}

#[test]
fn sorted_walker_behaves_like_lazy_walker() {
    let (_temp, root) = tree();
    let collect = |sort: bool| -> Vec<PathBuf> {
        let mut paths: Vec<PathBuf> = WalkBuilder::new(&root)
            .sort_entries(sort)
            .build()
            .expect("build walker")
            .map(|entry| entry.expect("entry").into_path())
            .collect();
        paths.sort();
        paths
    };
    assert_eq!(collect(false), collect(true));
}

#[test]
fn builder_accepts_path_references() {
    let (_temp, root) = tree();
    let by_ref: &Path = &root;
    let walker = WalkBuilder::new(by_ref).build().expect("build walker");
    assert_eq!(walker.root(), by_ref);
}

#[cfg(feature = "tracing")]
#[test]
fn yielded_entries_are_mirrored_as_tracing_events() {
    use logging::{DebugFlag, TreewalkLayer};
    use tracing_subscriber::layer::SubscriberExt;

    let (_temp, root) = tree();
    let mut config = VerbosityConfig::default();
    config.debug.walk = 2;
    init(config);
    drain_events();

    let subscriber = tracing_subscriber::registry().with(TreewalkLayer::new());
    tracing::subscriber::with_default(subscriber, || {
        let walker = WalkBuilder::new(&root)
            .sort_entries(true)
            .build()
            .expect("build walker");
        assert_eq!(walker.count(), 4);
    });

    let events = drain_events();
    init(VerbosityConfig::default());

    let traced: Vec<&str> = events
        .iter()
        .filter_map(|event| match event {
            DiagnosticEvent::Debug {
                flag: DebugFlag::Walk,
                level: 2,
                message,
            } => Some(message.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(traced.len(), 4, "{events:?}");
    assert_eq!(traced[0], "a");
    assert_eq!(traced[3], "b.txt");
}
