// src/banner.rs
use crate::runtime::{collect_runtime_info, RuntimeInfo};
use std::fmt;
use std::io::{self, Write};

/// Product line shown in the startup title bar.
pub const PRODUCT: &str = "CoexistAI Research Assistant v0.0.2";

const LOGO: &str = r#"
 ██████╗ ██████╗ ███████╗██╗  ██╗██╗███████╗████████╗ █████╗ ██╗
██╔════╝██╔═══██╗██╔════╝╚██╗██╔╝██║██╔════╝╚══██╔══╝██╔══██╗██║
██║     ██║   ██║█████╗   ╚███╔╝ ██║███████╗   ██║   ███████║██║
██║     ██║   ██║██╔══╝   ██╔██╗ ██║╚════██║   ██║   ██╔══██║██║
╚██████╗╚██████╔╝███████╗██╔╝ ██╗██║███████║   ██║   ██║  ██║██║
 ╚═════╝ ╚═════╝ ╚══════╝╚═╝  ╚═╝╚═╝╚══════╝   ╚═╝   ╚═╝  ╚═╝╚═╝
        "#;

const RULE: &str =
    "═══════════════════════════════════════════════════════════════════════════════";

/// ANSI styles used by the banners.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Cyan,
    Green,
    Yellow,
    Blue,
    Magenta,
    White,
    Bold,
    Reset,
}

impl Color {
    /// The escape sequence for this style.
    pub fn code(self) -> &'static str {
        match self {
            Color::Cyan => "\x1b[96m",
            Color::Green => "\x1b[92m",
            Color::Yellow => "\x1b[93m",
            Color::Blue => "\x1b[94m",
            Color::Magenta => "\x1b[95m",
            Color::White => "\x1b[97m",
            Color::Bold => "\x1b[1m",
            Color::Reset => "\x1b[0m",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

const CYAN: Color = Color::Cyan;
const GREEN: Color = Color::Green;
const YELLOW: Color = Color::Yellow;
const BLUE: Color = Color::Blue;
const MAGENTA: Color = Color::Magenta;
const WHITE: Color = Color::White;
const BOLD: Color = Color::Bold;
const RESET: Color = Color::Reset;

/// Where the server listens, as shown in the server status section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayParameters {
    pub host: String,
    pub port: u16,
    /// Port of the MCP server, when one is running alongside.
    pub mcp_port: Option<u16>,
}

impl DisplayParameters {
    pub fn new(host: impl Into<String>, port: u16, mcp_port: Option<u16>) -> Self {
        Self {
            host: host.into(),
            port,
            mcp_port,
        }
    }

    /// Base URL of the HTTP server.
    pub fn base_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

impl Default for DisplayParameters {
    fn default() -> Self {
        Self::new("localhost", 8000, None)
    }
}

/// Renders the full startup banner.
///
/// Pure: the same parameters and runtime snapshot always give the same text.
/// The MCP status line is only present when `params.mcp_port` is set to a
/// non-zero port.
pub fn render_startup_banner(params: &DisplayParameters, info: &RuntimeInfo) -> String {
    let base = params.base_url();

    let mut out = format!(
        r#"
{CYAN}{BOLD}{LOGO}{RESET}

{MAGENTA}{RULE}{RESET}
{BOLD}{WHITE}                        🚀 {PRODUCT}{RESET}
{MAGENTA}{RULE}{RESET}

{YELLOW}📋 SYSTEM OVERVIEW:{RESET}
{WHITE}   • Modular AI research framework with LLM integration{RESET}
{WHITE}   • Multi-source data exploration: Web, Reddit, YouTube, GitHub, Maps{RESET}
{WHITE}   • Async & parallel processing for optimal performance{RESET}
{WHITE}   • MCP (Model Context Protocol) compatible{RESET}

{BLUE}🔧 CORE FEATURES:{RESET}
{GREEN}   ✓ Web Explorer      {WHITE}- Query web, summarize results with LLMs{RESET}
{GREEN}   ✓ Reddit Explorer   {WHITE}- Search & analyze Reddit content with BM25 ranking{RESET}
{GREEN}   ✓ YouTube Explorer  {WHITE}- Transcript search, summarization & custom prompts{RESET}
{GREEN}   ✓ Map Explorer      {WHITE}- Location search, routing, POI discovery{RESET}
{GREEN}   ✓ GitHub Explorer   {WHITE}- Codebase analysis for GitHub & local repos{RESET}
{GREEN}   ✓ File Explorer     {WHITE}- Local file analysis with vision support{RESET}

{CYAN}🌐 SERVER STATUS:{RESET}
{WHITE}   • FastAPI Server:   {GREEN}{base}{RESET}
{WHITE}   • API Documentation: {GREEN}{base}/docs{RESET}
{WHITE}   • Health Check:     {GREEN}{base}/health{RESET}"#
    );

    if let Some(mcp_port) = params.mcp_port.filter(|p| *p != 0) {
        out.push_str(&format!(
            "\n{WHITE}   • MCP Server:       {GREEN}mcp://{}:{mcp_port}{RESET}",
            params.host
        ));
    }

    out.push_str(&format!(
        r#"

{YELLOW}⚙️  SYSTEM INFO:{RESET}
{WHITE}   • Rust Version:     {GREEN}{}{RESET}
{WHITE}   • Platform:         {GREEN}{}{RESET}
{WHITE}   • Started:          {GREEN}{}{RESET}
{WHITE}   • Contributor:      {GREEN}Sidhant Pravinkumar Thole{RESET}

{MAGENTA}{RULE}{RESET}
{BOLD}{CYAN}                    Ready to accelerate your research! 🎯{RESET}
{MAGENTA}{RULE}{RESET}
"#,
        info.interpreter_version, info.platform, info.startup_time
    ));

    out
}

/// Renders the shutdown message. Takes no input and never varies.
pub fn render_shutdown_banner() -> String {
    format!(
        r#"
{CYAN}{RULE}{RESET}
{BOLD}{YELLOW}                    🛑 CoexistAI Server Shutting Down...{RESET}
{CYAN}{RULE}{RESET}
"#
    )
}

/// Writes the startup banner, followed by a newline, to `out`.
pub fn write_startup_banner<W: Write>(
    out: &mut W,
    params: &DisplayParameters,
    info: &RuntimeInfo,
) -> io::Result<()> {
    writeln!(out, "{}", render_startup_banner(params, info))
}

/// Writes the shutdown banner, followed by a newline, to `out`.
pub fn write_shutdown_banner<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", render_shutdown_banner())
}

/// Prints the startup banner with a fresh runtime snapshot to stdout.
/// Write failures on stdout are ignored.
pub fn print_startup_banner(params: &DisplayParameters) {
    let info = collect_runtime_info();
    let _ = write_startup_banner(&mut io::stdout().lock(), params, &info);
}

/// Prints the shutdown banner to stdout.
pub fn print_shutdown_banner() {
    let _ = write_shutdown_banner(&mut io::stdout().lock());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot() -> RuntimeInfo {
        RuntimeInfo {
            interpreter_version: "1.95.0".to_string(),
            platform: "linux".to_string(),
            startup_time: "2026-10-19 09:30:00".to_string(),
        }
    }

    #[test]
    fn test_default_parameters() {
        let params = DisplayParameters::default();

        assert_eq!(params.host, "localhost");
        assert_eq!(params.port, 8000);
        assert_eq!(params.mcp_port, None);
        assert_eq!(params.base_url(), "http://localhost:8000");
    }

    #[test]
    fn test_colors_wrap_sections() {
        let banner = render_startup_banner(&DisplayParameters::default(), &snapshot());

        assert!(banner.starts_with("\n\x1b[96m\x1b[1m"));
        assert!(banner.contains("╚═╝\n        \x1b[0m\n"));
        assert!(banner.contains(&format!("{}http://localhost:8000{}", GREEN, RESET)));
        assert_eq!(Color::Reset.to_string(), "\x1b[0m");
    }

    #[test]
    fn test_system_info_section() {
        let banner = render_startup_banner(&DisplayParameters::default(), &snapshot());

        assert!(banner.contains("Rust Version:     \x1b[92m1.95.0"));
        assert!(banner.contains("Platform:         \x1b[92mlinux"));
        assert!(banner.contains("Started:          \x1b[92m2026-10-19 09:30:00"));
        assert!(banner.contains(PRODUCT));
    }

    #[test]
    fn test_mcp_line_adds_exactly_one_line() {
        let info = snapshot();
        let without = DisplayParameters::new("0.0.0.0", 9090, None);
        let with = DisplayParameters::new("0.0.0.0", 9090, Some(9091));
        let without = render_startup_banner(&without, &info);
        let with = render_startup_banner(&with, &info);

        assert_eq!(with.lines().count(), without.lines().count() + 1);
        assert!(with.contains("mcp://0.0.0.0:9091"));
        assert!(!without.contains("MCP Server"));
    }

    #[test]
    fn test_zero_mcp_port_is_treated_as_absent() {
        let info = snapshot();
        let zero = DisplayParameters::new("localhost", 8000, Some(0));
        let zero = render_startup_banner(&zero, &info);
        let none = render_startup_banner(&DisplayParameters::default(), &info);

        assert!(!zero.contains("MCP Server"));
        assert_eq!(zero.lines().count(), none.lines().count());
    }

    #[test]
    fn test_write_startup_banner_emits_rendered_text() {
        let params = DisplayParameters::new("0.0.0.0", 9090, Some(9091));
        let mut out = Vec::new();

        write_startup_banner(&mut out, &params, &snapshot()).unwrap();

        let written = String::from_utf8(out).unwrap();
        assert_eq!(written, format!("{}\n", render_startup_banner(&params, &snapshot())));
        assert!(written.contains("http://0.0.0.0:9090/health"));
    }

    #[test]
    fn test_write_shutdown_banner_emits_rendered_text() {
        let mut out = Vec::new();

        write_shutdown_banner(&mut out).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), format!("{}\n", render_shutdown_banner()));
    }

    #[test]
    fn test_shutdown_banner() {
        let banner = render_shutdown_banner();

        assert!(banner.contains("CoexistAI Server Shutting Down..."));
        assert_eq!(banner.lines().filter(|l| !l.is_empty()).count(), 3);
    }
}
