//! `styles.css` generation.
//!
//! Baseline primitives only: glass panels, the slide grid with its layout
//! variants, sidebar lists, navigation, the progress bar and the float
//! keyframes. Comments stay on one line each so minification can drop them.

const STYLESHEET: &str = r#"/* base */
:root {
    --bg: #0f172a;
    --fg: #f8fafc;
    --accent: #38bdf8;
    --glass-bg: rgba(255, 255, 255, 0.08);
    --glass-border: rgba(255, 255, 255, 0.18);
    --sidebar-font: 1rem;
}

* {
    box-sizing: border-box;
    margin: 0;
    padding: 0;
}

body {
    font-family: -apple-system, system-ui, 'Segoe UI', Roboto, sans-serif;
    background: radial-gradient(circle at top left, #1e293b, var(--bg));
    color: var(--fg);
    min-height: 100vh;
    overflow: hidden;
}

/* glass effect */
.glass {
    background: var(--glass-bg);
    border: 1px solid var(--glass-border);
    border-radius: 16px;
    backdrop-filter: blur(12px);
    -webkit-backdrop-filter: blur(12px);
    box-shadow: 0 8px 32px rgba(0, 0, 0, 0.25);
}

/* slide grid */
.presentation {
    display: grid;
    grid-template-rows: auto 1fr auto;
    height: 100vh;
    padding: 1.5rem;
    gap: 1rem;
}

.slide {
    display: grid;
    grid-template-columns: 2fr 1fr;
    grid-template-areas: "main sidebar";
    gap: 1.5rem;
    min-height: 0;
}

.slide-main {
    grid-area: main;
    padding: 2rem;
    display: flex;
    flex-direction: column;
    justify-content: center;
}

.slide-main h1 {
    font-size: 2.5rem;
    line-height: 1.2;
}

.sidebar {
    grid-area: sidebar;
    display: flex;
    flex-direction: column;
    gap: 1rem;
    overflow-y: auto;
}

.layout-focus {
    grid-template-columns: 1fr;
    grid-template-areas: "main";
}

.layout-focus .sidebar {
    display: none;
}

.layout-split {
    grid-template-columns: 1fr 1fr;
}

.layout-sidebar {
    grid-template-columns: 1fr 2fr;
}

/* sidebar sections */
.sidebar-section {
    padding: 1rem 1.25rem;
}

.sidebar-section h2 {
    font-size: 0.8rem;
    letter-spacing: 0.08em;
    text-transform: uppercase;
    color: var(--accent);
    margin-bottom: 0.75rem;
}

.sidebar-section ul {
    list-style: none;
    display: flex;
    flex-direction: column;
    gap: 0.6rem;
}

.sidebar-item {
    font-size: calc(var(--sidebar-font) * var(--font-scale, 1));
    will-change: opacity, transform;
}

.sidebar-item strong {
    display: block;
}

.sidebar-item.emphasis strong {
    color: var(--accent);
}

.sidebar-item span {
    opacity: 0.75;
    font-size: 0.9em;
}

/* navigation */
.nav {
    display: flex;
    align-items: center;
    gap: 0.5rem;
    padding: 0.5rem 0.75rem;
    justify-self: center;
}

.nav button {
    background: transparent;
    border: none;
    color: var(--fg);
    font-size: 1rem;
    padding: 0.4rem 0.7rem;
    border-radius: 8px;
    cursor: pointer;
}

.nav button:hover {
    background: var(--glass-bg);
}

.nav button:disabled {
    opacity: 0.3;
    cursor: default;
}

.counter {
    font-variant-numeric: tabular-nums;
    opacity: 0.7;
    padding: 0 0.5rem;
}

/* progress */
.progress {
    height: 4px;
    background: var(--glass-bg);
    border-radius: 2px;
    overflow: hidden;
}

.progress-bar {
    height: 100%;
    width: 0;
    background: var(--accent);
}

/* float keyframes */
@keyframes float {
    0% { transform: translateY(0); }
    50% { transform: translateY(-8px); }
    100% { transform: translateY(0); }
}

.floating {
    animation: float 6s ease-in-out infinite;
}

@media (prefers-reduced-motion: reduce) {
    .floating {
        animation: none;
    }
}
"#;

/// The bundle stylesheet.
pub fn generate_css() -> String {
    STYLESHEET.to_string()
}
