//! Inline styles - no external CSS files
//!
//! Light/dark theme aware, like the rest of the dashboard.

// ============================================================================
// Layout
// ============================================================================

/// Generate app style based on theme
pub fn app_style(dark: bool) -> String {
    let (bg, fg) = if dark {
        ("#0d1117", "#c9d1d9")
    } else {
        ("#ffffff", "#1a1a1a")
    };
    format!(
        "min-height: 100vh; \
         display: flex; \
         flex-direction: column; \
         font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', 'Noto Sans', Helvetica, Arial, sans-serif; \
         font-size: 14px; \
         background: {bg}; \
         color: {fg}; \
         line-height: 1.5; \
         margin: 0; \
         padding: 0;"
    )
}

/// Generate header style
pub fn header_style(dark: bool) -> String {
    let (bg, border) = if dark {
        ("#161b22", "#30363d")
    } else {
        ("#f6f8fa", "#d0d7de")
    };
    format!(
        "display: flex; \
         justify-content: space-between; \
         align-items: center; \
         padding: 0.75rem 1rem; \
         background: {bg}; \
         border-bottom: 1px solid {border};"
    )
}

pub fn title_style(_dark: bool) -> &'static str {
    "font-size: 1.1rem; \
     font-weight: 600; \
     margin: 0;"
}

/// Generate theme toggle button style
pub fn toggle_btn_style(dark: bool) -> String {
    let (bg, fg, border) = if dark {
        ("#21262d", "#c9d1d9", "#30363d")
    } else {
        ("#f6f8fa", "#1a1a1a", "#d0d7de")
    };
    format!(
        "background: {bg}; \
         color: {fg}; \
         border: 1px solid {border}; \
         padding: 0.35rem 0.75rem; \
         font-family: inherit; \
         font-size: 0.8rem; \
         border-radius: 6px; \
         cursor: pointer;"
    )
}

/// Main content area style
pub fn main_content_style(dark: bool) -> String {
    let bg = if dark { "#0d1117" } else { "#ffffff" };
    format!(
        "flex: 1; \
         padding: 1.5rem 2rem; \
         overflow-y: auto; \
         background: {bg};"
    )
}

// ============================================================================
// Revision controls
// ============================================================================

/// Bar holding the two revision selects and the engines checkbox
pub fn controls_style(dark: bool) -> String {
    let border = if dark { "#30363d" } else { "#d0d7de" };
    format!(
        "display: flex; \
         flex-wrap: wrap; \
         align-items: center; \
         gap: 0.75rem; \
         padding-bottom: 1rem; \
         margin-bottom: 1rem; \
         border-bottom: 1px solid {border};"
    )
}

/// Revision select style
pub fn select_style(dark: bool) -> String {
    let (bg, fg, border) = if dark {
        ("#0d1117", "#c9d1d9", "#30363d")
    } else {
        ("#ffffff", "#1a1a1a", "#d0d7de")
    };
    format!(
        "min-width: 320px; \
         padding: 0.4rem 0.6rem; \
         background: {bg}; \
         color: {fg}; \
         border: 1px solid {border}; \
         border-radius: 6px; \
         font-family: 'SF Mono', 'Fira Code', monospace; \
         font-size: 0.8rem;"
    )
}

pub fn checkbox_label_style(_dark: bool) -> &'static str {
    "display: flex; \
     align-items: center; \
     gap: 0.4rem; \
     font-size: 0.85rem; \
     cursor: pointer;"
}

// ============================================================================
// Charts
// ============================================================================

/// Chart card style
pub fn chart_card_style(dark: bool) -> String {
    let (bg, border) = if dark {
        ("#161b22", "#30363d")
    } else {
        ("#ffffff", "#d0d7de")
    };
    format!(
        "background: {bg}; \
         border: 1px solid {border}; \
         border-radius: 8px; \
         margin-bottom: 1rem; \
         overflow: hidden;"
    )
}

/// Generate chart header style
pub fn chart_header_style(dark: bool) -> String {
    let (bg, border) = if dark {
        ("#21262d", "#30363d")
    } else {
        ("#f6f8fa", "#d0d7de")
    };
    format!(
        "display: flex; \
         justify-content: space-between; \
         align-items: center; \
         padding: 0.75rem 1rem; \
         background: {bg}; \
         border-bottom: 1px solid {border};"
    )
}

/// Generate chart title style
pub fn chart_title_style(dark: bool) -> String {
    let fg = if dark { "#c9d1d9" } else { "#1a1a1a" };
    format!(
        "font-size: 0.95rem; \
         font-weight: 600; \
         color: {fg};"
    )
}

/// Badge flagging series of different lengths
pub fn warning_badge_style(dark: bool) -> String {
    let fg = if dark { "#d29922" } else { "#9a6700" };
    format!(
        "color: {fg}; \
         font-size: 0.75rem; \
         font-weight: 500;"
    )
}

/// Chart legend style
pub fn chart_legend_style(dark: bool) -> String {
    let border = if dark { "#30363d" } else { "#d0d7de" };
    format!(
        "display: flex; \
         flex-wrap: wrap; \
         gap: 1.5rem; \
         padding: 0.75rem 1rem; \
         border-top: 1px solid {border}; \
         font-size: 0.85rem;"
    )
}

pub fn legend_item_style(_dark: bool) -> &'static str {
    "display: flex; \
     align-items: center; \
     gap: 0.4rem;"
}

// ============================================================================
// States
// ============================================================================

/// Generate muted text style
pub fn muted_style(_dark: bool) -> &'static str {
    "color: #6e7681;"
}

/// Generate loading style
pub fn loading_style(_dark: bool) -> &'static str {
    "padding: 2rem; \
     text-align: center;"
}

/// Generate error style
pub fn error_style(dark: bool) -> String {
    let border = if dark { "#f85149" } else { "#cf222e" };
    format!(
        "padding: 1rem; \
         border: 1px solid {border}; \
         border-radius: 8px; \
         margin: 1rem 0;"
    )
}

/// Generate empty state style
pub fn empty_style(_dark: bool) -> &'static str {
    "padding: 2rem; \
     text-align: center; \
     opacity: 0.7;"
}

/// Generate code/mono style
pub fn code_style(dark: bool) -> String {
    let (bg, fg) = if dark {
        ("#21262d", "#79c0ff")
    } else {
        ("#f6f8fa", "#0550ae")
    };
    format!(
        "background: {bg}; \
         color: {fg}; \
         padding: 0.2rem 0.5rem; \
         border-radius: 4px; \
         font-size: 0.85rem; \
         font-family: 'SF Mono', 'Fira Code', monospace;"
    )
}

/// SVG grid line color
pub fn grid_color(dark: bool) -> &'static str {
    if dark { "#21262d" } else { "#eaeef2" }
}

/// SVG axis label color
pub fn axis_color(_dark: bool) -> &'static str {
    "#6e7681"
}
