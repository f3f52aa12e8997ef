use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use blood_token::{
    listener, parse_bounty_list, persist_listener, BountyError, BountyList, BountyRegistry,
    BountyStorage,
};

fn list(entries: &[(&str, Option<&str>)]) -> BountyList {
    entries
        .iter()
        .map(|(h, r)| (*h, r.map(str::to_string)))
        .collect()
}

#[test]
fn fresh_registry_holds_thunderlake() {
    let registry = BountyRegistry::new();
    assert_eq!(
        registry.get(),
        list(&[("Thunderlake", Some("Must kill with knife"))])
    );
}

#[test]
fn panel_refreshes_from_edited_text() {
    let registry = Arc::new(BountyRegistry::new());
    let rendered = Arc::new(parking_lot::Mutex::new(Vec::<String>::new()));

    let panel = {
        let rendered = rendered.clone();
        listener(move |targets| {
            rendered.lock().push(blood_token::format_bounty_targets(targets));
            Ok(())
        })
    };
    registry.register_listener(panel.clone());

    let edited = "\n  Alice | headshot only \n\nBob\n";
    registry.set(BountyRegistry::parse(edited).unwrap());

    assert!(matches!(
        BountyRegistry::parse("   \n"),
        Err(BountyError::NoEntries)
    ));

    registry.unregister_listener(&panel);
    registry.set(list(&[("Carol", None)]));

    assert_eq!(*rendered.lock(), vec!["Alice | headshot only\nBob".to_string()]);
    assert_eq!(registry.format(None), "Carol");
}

#[test]
fn broken_observer_does_not_block_persistence() {
    let storage = Arc::new(BountyStorage::in_memory().unwrap());
    let registry = BountyRegistry::new();
    let calls = Arc::new(AtomicUsize::new(0));

    registry.register_listener(listener(|_| panic!("stale window handle")));
    registry.register_listener(persist_listener(storage.clone()));
    {
        let calls = calls.clone();
        registry.register_listener(listener(move |_| {
            calls.fetch_add(1, Ordering::SeqCst);
            anyhow::bail!("refresh failed")
        }));
    }

    let targets = parse_bounty_list("A\nA | x").unwrap();
    registry.set(targets.clone());
    registry.set(targets.clone());

    assert_eq!(calls.load(Ordering::SeqCst), 2);
    assert_eq!(storage.load_list().unwrap(), Some(list(&[("A", Some("x"))])));
    assert_eq!(storage.revisions(10).unwrap().len(), 2);
}

#[test]
fn registry_is_shareable_across_threads() {
    let registry = Arc::new(BountyRegistry::new());

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let registry = registry.clone();
            std::thread::spawn(move || {
                registry.set(list(&[(format!("P{}", i).as_str(), None)]));
                registry.get().len()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), 1);
    }
    assert_eq!(registry.get().len(), 1);
}
