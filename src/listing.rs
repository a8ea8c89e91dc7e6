use owo_colors::OwoColorize;

use crate::parsers::Registry;

/// List all registered parsers
pub fn list_parsers(registry: &Registry) {
    for name in registry.names() {
        let Ok(parser) = registry.get(&name) else {
            continue;
        };
        println!(
            "{}  {} ({})",
            name.bold(),
            parser.description().dimmed(),
            parser.supported_extensions().join(", ")
        );
    }
}
