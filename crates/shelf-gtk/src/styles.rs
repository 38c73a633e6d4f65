//! CSS for the launcher window

use gtk4::gdk;
use tracing::{debug, warn};

mod palette {
    pub const WINDOW_BG: &str = "#fefae0";
    pub const PANEL_BG: &str = "lightgray";
    pub const HEADER_BG: &str = "#a0c4ff";
    pub const BUTTON_BG: &str = "#ffafcc";
    pub const BUTTON_ACTIVE_BG: &str = "#ffb6c1";
    pub const MENU_BG: &str = "#bde0fe";
    pub const MENU_ACTIVE_BG: &str = "#90e0ef";
}

pub(crate) fn css() -> String {
    use palette::{
        BUTTON_ACTIVE_BG, BUTTON_BG, HEADER_BG, MENU_ACTIVE_BG, MENU_BG, PANEL_BG, WINDOW_BG,
    };

    format!(
        r#"
        window.shelf {{
            background-color: {WINDOW_BG};
        }}

        .search-entry {{
            background-color: white;
            color: black;
            font-family: "Arial";
            font-size: 12pt;
            margin: 5px 10px;
        }}

        .category-panel {{
            background-color: {PANEL_BG};
            border: 2px solid black;
            margin: 5px 10px;
        }}

        .category-label {{
            background-color: {HEADER_BG};
            color: white;
            font-family: "Arial";
            font-size: 12pt;
            font-weight: bold;
            margin: 5px;
            padding: 2px 4px;
        }}

        button.app-button {{
            background: {BUTTON_BG};
            color: black;
            font-family: "Arial";
            font-size: 10pt;
            margin: 2px 10px;
        }}

        button.app-button:hover,
        button.app-button:active {{
            background: {BUTTON_ACTIVE_BG};
            color: white;
        }}

        menubar,
        menubar popover contents {{
            background-color: {MENU_BG};
            color: black;
        }}

        menubar popover modelbutton:hover {{
            background-color: {MENU_ACTIVE_BG};
        }}
        "#
    )
}

/// Register the launcher stylesheet for the default display
pub(crate) fn install() {
    let Some(display) = gdk::Display::default() else {
        warn!("No default display, skipping stylesheet");
        return;
    };

    let provider = gtk4::CssProvider::new();
    provider.load_from_string(&css());
    gtk4::style_context_add_provider_for_display(
        &display,
        &provider,
        gtk4::STYLE_PROVIDER_PRIORITY_APPLICATION,
    );
    debug!("Stylesheet installed");
}
