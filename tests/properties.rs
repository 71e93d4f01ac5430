//! Property tests over the parser entry points.

use mf1_common::Span;
use mf1_parser::{ParseConfig, parse_with_config, parse_with_diagnostics};
use mf1_syntax::{Node, to_source};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    // Input without `'`, `{`, `}` or `<` never needs the tokenizer
    #[test]
    fn fast_path_matches_full_parse(text in "[^'{}<]*") {
        let fast = parse_with_config(&text, &ParseConfig::new());
        let full = parse_with_config(&text, &ParseConfig::new().fast_path(false));
        prop_assert_eq!(&fast, &full);
        prop_assert!(fast.1.is_empty());
        prop_assert_eq!(
            fast.0,
            Node::text(text.clone()).with_span(Span::from_usize(0, text.len()))
        );
    }

    // Any text survives printing and re-parsing once quoted
    #[test]
    fn printed_text_reparses(text in any::<String>()) {
        let source = to_source(&Node::text(text.clone())).unwrap();
        let (node, diags) = parse_with_diagnostics(&source);
        prop_assert!(diags.is_empty(), "{:?} -> {:?}: {:?}", text, source, diags);
        prop_assert_eq!(node.as_text(), Some(text.as_str()));
    }

    // Lenient parsing never panics, whatever the input
    #[test]
    fn lenient_parse_is_total(text in "[a-z0-9{}<>/=:,# '\u{200B}]{0,40}") {
        let (node, _) = parse_with_diagnostics(&text);
        if let Some(span) = node.span {
            prop_assert!(span.end.0 as usize <= text.len());
        }
    }
}
