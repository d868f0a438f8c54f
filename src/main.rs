//! Headless driver: builds a session, optionally loads a built-in template
//! and prints the resulting scene as JSON.
//!
//! ```text
//! erdraft [TEMPLATE]
//! ```

use anyhow::Context;
use erdraft::EditorSession;
use erdraft::logging::init_logging;
use erdraft::settings::EditorSettings;
use erdraft::templates::builtin_templates;

fn main() -> anyhow::Result<()> {
    init_logging();

    let mut session = EditorSession::new(EditorSettings::load());

    if let Some(name) = std::env::args().nth(1) {
        session.load_template(&name).with_context(|| {
            let known: Vec<&str> = builtin_templates().iter().map(|t| t.name.as_str()).collect();
            format!("available templates: {}", known.join(", "))
        })?;
    }

    let json = serde_json::to_string_pretty(&session.scene().snapshot())?;
    println!("{json}");
    Ok(())
}
