//! Diagnostics for the MF1 message parser.
//! MF1 消息解析器的诊断信息。
//!
//! Diagnostics are plain data: a closed `DiagnosticKind` plus the span it
//! applies to. `describe` turns one into text; `render` and `emit` build an
//! ariadne report for terminals.
//! 诊断信息是纯数据；`render` 和 `emit` 使用 ariadne 生成报告。

mod bag;
mod codes;
mod diagnostic;

pub use bag::DiagnosticBag;
pub use codes::{Category, ErrorCode};
pub use diagnostic::{Diagnostic, DiagnosticKind, Found, describe};

use ariadne::{Config, IndexType, Label, Report, ReportKind, Source};

fn build_report<'a>(
    filename: &'a str,
    diagnostic: &Diagnostic,
    color: bool,
) -> Report<'a, (&'a str, std::ops::Range<usize>)> {
    let code = diagnostic.code();
    let mut report = Report::build(ReportKind::Error, filename, diagnostic.span.range().start)
        .with_config(
            Config::default()
                .with_color(color)
                .with_index_type(IndexType::Byte),
        )
        .with_code(code.as_str())
        .with_message(describe(diagnostic))
        .with_label(Label::new((filename, diagnostic.span.range())).with_message("here"));

    if let Some(help) = code.suggestion() {
        report = report.with_help(help);
    }

    report.finish()
}

/// Render a diagnostic against its message source.
/// 将诊断信息渲染为字符串。
pub fn render(source: &str, filename: &str, diagnostic: &Diagnostic, color: bool) -> String {
    let mut out = Vec::new();
    // Writing into a Vec cannot fail.
    let _ = build_report(filename, diagnostic, color).write((filename, Source::from(source)), &mut out);
    String::from_utf8_lossy(&out).into_owned()
}

/// Render a diagnostic to stderr.
/// 将诊断信息渲染到标准错误输出。
pub fn emit(source: &str, filename: &str, diagnostic: &Diagnostic) -> std::io::Result<()> {
    build_report(filename, diagnostic, true).eprint((filename, Source::from(source)))
}
