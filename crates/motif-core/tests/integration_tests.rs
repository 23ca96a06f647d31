//! Integration tests for motif-core.

use motif_adapters::MemoryConsole;
use motif_core::prelude::*;

const REFERENCE_RUN: &str = "\
==== FLYWEIGHT ====
Circle color: Red, at (10, 20)
Circle color: Red, at (30, 40)

==== ADAPTER ====
Old printer is printing...

==== BRIDGE ====
API1.circle at (5, 10) radius: 15
API2.circle at (7, 14) radius: 21

==== FACADE ====
CPU started
Memory loaded
Hard Drive read
";

#[test]
fn test_full_reference_run() {
    let console = MemoryConsole::new();
    let showcase = Showcase::new(Box::new(console.clone()));

    showcase.run(&Section::ALL).unwrap();

    assert_eq!(console.transcript(), REFERENCE_RUN);
}

#[test]
fn test_sections_are_independent_of_order() {
    let console = MemoryConsole::new();
    let showcase = Showcase::new(Box::new(console.clone()));

    showcase.run(&[Section::Facade, Section::Flyweight]).unwrap();

    assert_eq!(
        console.lines(),
        vec![
            "==== FACADE ====",
            "CPU started",
            "Memory loaded",
            "Hard Drive read",
            "",
            "==== FLYWEIGHT ====",
            "Circle color: Red, at (10, 20)",
            "Circle color: Red, at (30, 40)",
        ]
    );
}

#[test]
fn test_repeated_section_starts_from_scratch() {
    let console = MemoryConsole::new();
    let showcase = Showcase::new(Box::new(console.clone()));

    showcase.run_section(Section::Facade).unwrap();
    showcase.run_section(Section::Facade).unwrap();

    let lines = console.lines();
    assert_eq!(lines.len(), 8);
    assert_eq!(lines[..4], lines[4..]);
}

#[test]
fn test_flyweight_end_to_end() {
    let console = MemoryConsole::new();
    let mut factory = ShapeFactory::new();

    let red = factory.acquire("Red");
    factory.render(red, 10, 20, &console).unwrap();
    let again = factory.acquire("Red");

    assert_eq!(red, again);
    assert!(std::ptr::eq(
        factory.get(red).unwrap(),
        factory.get(again).unwrap()
    ));

    let line = &console.lines()[0];
    assert!(line.contains("Red"));
    assert!(line.contains("10"));
    assert!(line.contains("20"));
}

#[test]
fn test_flyweight_attribute_matches_key() {
    let mut factory = ShapeFactory::new();
    let keys = ["Red", "red", "", "with space", "ünïcödé", "Red"];
    for key in keys {
        let console = MemoryConsole::new();
        let id = factory.acquire(key);
        assert_eq!(factory.acquire(key), id);
        factory.render(id, 0, 0, &console).unwrap();
        assert_eq!(
            console.lines(),
            vec![format!("Circle color: {key}, at (0, 0)")]
        );
    }
    assert_eq!(factory.len(), 5);
}

#[test]
fn test_adapter_matches_legacy_output() {
    let direct = MemoryConsole::new();
    let adapted = MemoryConsole::new();
    let legacy = LegacyPrinter;

    legacy.old_print(&direct).unwrap();
    PrinterAdapter::new(&legacy).print(&adapted).unwrap();

    assert_eq!(direct.lines(), adapted.lines());
}

#[test]
fn test_bridge_swapping_backends_changes_only_tag() {
    let api1 = DrawingApi1;
    let api2 = DrawingApi2;
    let first = MemoryConsole::new();
    let second = MemoryConsole::new();

    CircleShape::new(3.0, 4.5, 6.0, &api1).draw(&first).unwrap();
    CircleShape::new(3.0, 4.5, 6.0, &api2).draw(&second).unwrap();

    let a = &first.lines()[0];
    let b = &second.lines()[0];
    assert_ne!(a, b);
    assert_eq!(a.strip_prefix("API1"), b.strip_prefix("API2"));
}

#[test]
fn test_facade_always_three_lines() {
    let console = MemoryConsole::new();
    let facade = ComputerFacade::new();

    for _ in 0..3 {
        console.clear();
        facade.start_all(&console).unwrap();
        assert_eq!(
            console.lines(),
            vec!["CPU started", "Memory loaded", "Hard Drive read"]
        );
    }
}
