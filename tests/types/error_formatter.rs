use error_chainlink::{ErrorFormatConfig, ErrorFormatter, ErrorNode};
use std::fmt::Display;

fn sample() -> ErrorNode {
    ErrorNode::invalid_character().wrap_with("parsing header").wrap_with("loading config")
}

#[test]
fn default_chain_uses_arrows() {
    assert_eq!(sample().error_chain(), "loading config -> parsing header -> INVALID CHARACTER");
}

#[test]
fn unlabeled_wrappers_are_elided() {
    let err = ErrorNode::end_of_stream().wrap().wrap_with("reading").wrap();
    assert_eq!(err.error_chain(), "reading -> EOF");
}

#[test]
fn show_kind_renders_every_link() {
    let err = ErrorNode::end_of_stream().wrap();
    let rendered = err.fmt().show_kind(true).to_string();

    assert_eq!(rendered, "Wrapped -> EndOfStream(EOF)");
}

#[test]
fn root_first_reverses_order() {
    let rendered = sample().fmt().root_first(true).to_string();
    assert_eq!(rendered, "INVALID CHARACTER -> parsing header -> loading config");
}

#[test]
fn custom_separator() {
    let rendered = sample().fmt().with_separator(" <- ").to_string();
    assert_eq!(rendered, "loading config <- parsing header <- INVALID CHARACTER");
}

#[test]
fn compact_preset() {
    assert_eq!(
        sample().fmt().compact().to_string(),
        "loading config | parsing header | INVALID CHARACTER"
    );
}

#[test]
fn cascaded_preset_indents_each_level() {
    assert_eq!(
        sample().fmt().cascaded().to_string(),
        "loading config\n  parsing header\n    INVALID CHARACTER"
    );
}

#[test]
fn pretty_preset_draws_tree() {
    assert_eq!(
        sample().fmt().pretty().to_string(),
        "┌ loading config\n├─ parsing header\n└─ INVALID CHARACTER"
    );
}

#[test]
fn pretty_with_single_link() {
    let err = ErrorNode::message("alone");
    assert_eq!(err.fmt().pretty().to_string(), "┌ alone");
}

#[test]
fn root_affixes_apply_to_root_only() {
    let config = ErrorFormatConfig {
        link_prefix: Some("<".into()),
        link_suffix: Some(">".into()),
        root_prefix: Some("[".into()),
        root_suffix: Some("]".into()),
        ..Default::default()
    };

    assert_eq!(
        sample().fmt().with_config(config).to_string(),
        "<loading config> -> <parsing header> -> [INVALID CHARACTER]"
    );
}

#[test]
fn cascaded_layout_keeps_suffixes() {
    let config = ErrorFormatConfig {
        link_suffix: Some(";".into()),
        root_suffix: Some(".".into()),
        ..ErrorFormatConfig::cascaded()
    };

    assert_eq!(
        sample().fmt().with_config(config).to_string(),
        "loading config;\n  parsing header;\n    INVALID CHARACTER."
    );
}

#[test]
fn tree_layout_keeps_suffixes() {
    let config = ErrorFormatConfig {
        link_suffix: Some(";".into()),
        root_suffix: Some(".".into()),
        ..ErrorFormatConfig::pretty()
    };

    assert_eq!(
        sample().fmt().with_config(config.clone()).to_string(),
        "┌ loading config;\n├─ parsing header;\n└─ INVALID CHARACTER."
    );

    let alone = ErrorNode::end_of_stream();
    assert_eq!(alone.fmt().with_config(config).to_string(), "┌ EOF.");
}

#[test]
fn config_items_use_link_affixes_and_root_falls_back() {
    let config = ErrorFormatConfig {
        link_prefix: Some("<".into()),
        link_suffix: Some(">".into()),
        ..Default::default()
    };

    assert_eq!(config.format_item(&"x"), "<x>");
    assert_eq!(config.format_root(&"x"), "<x>");
    assert_eq!(ErrorFormatConfig::default().format_item(&"x"), "x");
}

#[test]
fn custom_formatter_trait_defaults() {
    struct Upper;

    impl ErrorFormatter for Upper {
        fn format_item(&self, item: &dyn Display) -> String {
            item.to_string().to_uppercase()
        }

        fn separator(&self) -> &str {
            " / "
        }
    }

    let a = "first";
    let b = "second";
    let items: Vec<&dyn Display> = vec![&a, &b];

    assert_eq!(Upper.format_chain(items.into_iter()), "FIRST / SECOND");
}

#[test]
fn empty_chain_formats_to_empty_string() {
    let items: Vec<&dyn Display> = Vec::new();
    assert_eq!(ErrorFormatConfig::default().format_chain(items.into_iter()), "");
}
