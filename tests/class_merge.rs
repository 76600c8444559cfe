use coin_board::cn;
use coin_board::style::{
    CategoryTable, ClassCategory, ClassMerger, ClassToken, ValueKind, join_classes,
};

// --- flattening ---

#[test]
fn test_cn_empty() {
    assert_eq!(cn!(), "");
}

#[test]
fn test_cn_single_class() {
    assert_eq!(cn!("text-red-500"), "text-red-500");
}

#[test]
fn test_cn_joins_with_space() {
    assert_eq!(cn!("a", "b"), "a b");
    assert_eq!(cn!("text-red-500", "bg-blue-200"), "text-red-500 bg-blue-200");
}

#[test]
fn test_cn_ignores_falsy() {
    assert_eq!(cn!("text-white", None::<&str>, ClassToken::Empty, false), "text-white");
}

#[test]
fn test_cn_true_adds_nothing() {
    assert_eq!(cn!("a", true), "a");
}

#[test]
fn test_cn_conditional_map() {
    let is_active = true;
    let is_disabled = false;
    assert_eq!(
        cn!(ClassToken::map([("bg-green-500", is_active), ("opacity-50", is_disabled)])),
        "bg-green-500"
    );
    assert_eq!(cn!([("x", true), ("y", false)]), "x");
}

#[test]
fn test_cn_map_keeps_insertion_order() {
    assert_eq!(cn!(ClassToken::map([("z", true), ("a", true), ("m", true)])), "z a m");
}

#[test]
fn test_cn_array() {
    assert_eq!(cn!(["text-sm", "font-bold"]), "text-sm font-bold");
    assert_eq!(cn!(vec!["a", "b"]), "a b");
}

#[test]
fn test_cn_nested_lists_depth_first() {
    let nested = vec![
        ClassToken::from("a"),
        ClassToken::from(vec!["b", "c"]),
        ClassToken::from(Some("d")),
    ];
    assert_eq!(cn!(nested, "e"), "a b c d e");
}

#[test]
fn test_cn_normalizes_whitespace() {
    assert_eq!(cn!("  a   b ", "\tc\n"), "a b c");
    assert_eq!(cn!("   "), "");
}

#[test]
fn test_cn_function_form() {
    assert_eq!(coin_board::style::cn(["p-4", "p-2"]), "p-2");
    assert_eq!(coin_board::style::cn(Vec::<&str>::new()), "");
}

#[test]
fn test_join_classes_does_not_resolve_conflicts() {
    assert_eq!(
        join_classes(["a a", "text-red-500", "text-blue-500"]),
        "a a text-red-500 text-blue-500"
    );
}

// --- conflict resolution ---

#[test]
fn test_same_category_last_wins() {
    assert_eq!(cn!("text-red-500", "text-blue-500"), "text-blue-500");
}

#[test]
fn test_padding_last_wins() {
    assert_eq!(cn!("p-4", "p-2"), "p-2");
}

#[test]
fn test_survivors_keep_input_order() {
    assert_eq!(cn!("text-red-500 p-4", "text-blue-500"), "p-4 text-blue-500");
}

#[test]
fn test_shorthand_overrides_axis() {
    assert_eq!(cn!("px-4", "p-2"), "p-2");
    assert_eq!(cn!("pt-1 pl-3", "py-2"), "pl-3 py-2");
}

#[test]
fn test_axis_does_not_override_shorthand() {
    assert_eq!(cn!("p-2", "px-4"), "p-2 px-4");
}

#[test]
fn test_margin_negative_values_share_category() {
    assert_eq!(cn!("-m-2", "m-4"), "m-4");
    assert_eq!(cn!("m-4", "-mt-1"), "m-4 -mt-1");
}

#[test]
fn test_font_size_and_color_do_not_conflict() {
    assert_eq!(cn!("text-lg", "text-red-500"), "text-lg text-red-500");
    assert_eq!(cn!("text-lg", "text-sm"), "text-sm");
    assert_eq!(cn!("text-left", "text-center"), "text-center");
}

#[test]
fn test_variants_are_separate_categories() {
    assert_eq!(
        cn!("hover:text-red-500", "text-blue-500"),
        "hover:text-red-500 text-blue-500"
    );
    assert_eq!(cn!("hover:p-2", "hover:p-4"), "hover:p-4");
}

#[test]
fn test_variant_order_does_not_matter() {
    assert_eq!(cn!("hover:md:p-2", "md:hover:p-4"), "md:hover:p-4");
}

#[test]
fn test_important_is_separate() {
    assert_eq!(cn!("!p-2", "p-4"), "!p-2 p-4");
    assert_eq!(cn!("!p-2", "!p-4"), "!p-4");
    assert_eq!(cn!("p-2!", "!p-4"), "!p-4");
}

#[test]
fn test_opacity_postfix() {
    assert_eq!(cn!("bg-red-500/50", "bg-blue-500"), "bg-blue-500");
}

#[test]
fn test_fraction_width() {
    assert_eq!(cn!("w-1/2", "w-full"), "w-full");
}

#[test]
fn test_arbitrary_values() {
    assert_eq!(cn!("p-[3px]", "p-4"), "p-4");
    assert_eq!(cn!("text-[14px]", "text-[#ff0000]"), "text-[14px] text-[#ff0000]");
    assert_eq!(cn!("text-red-500", "text-[#ff0000]"), "text-[#ff0000]");
}

#[test]
fn test_arbitrary_property() {
    assert_eq!(
        cn!("[mask-type:alpha]", "[mask-type:luminance]"),
        "[mask-type:luminance]"
    );
}

#[test]
fn test_border_width_and_color() {
    assert_eq!(cn!("border-2", "border-red-500", "border"), "border-red-500 border");
    assert_eq!(cn!("border-t-4", "border-2"), "border-2");
}

#[test]
fn test_display_and_flex() {
    assert_eq!(cn!("block", "hidden"), "hidden");
    assert_eq!(cn!("flex", "flex-col"), "flex flex-col");
    assert_eq!(cn!("flex-row", "flex-col"), "flex-col");
}

#[test]
fn test_rounded_sides() {
    assert_eq!(cn!("rounded-t-lg", "rounded-md"), "rounded-md");
    assert_eq!(cn!("rounded-md", "rounded-t-lg"), "rounded-md rounded-t-lg");
}

#[test]
fn test_unknown_classes_deduplicated() {
    assert_eq!(cn!("card", "card", "shadow"), "card shadow");
    assert_eq!(cn!("card shadow", "card"), "shadow card");
}

#[test]
fn test_merge_is_idempotent() {
    let once = cn!("p-4 text-red-500", "px-2 text-blue-500 hover:text-green-500");
    assert_eq!(once, "p-4 px-2 text-blue-500 hover:text-green-500");
    assert_eq!(cn!(once.clone()), once);

    let samples = [
        cn!("card", "card", "text-lg", "text-sm font-bold"),
        cn!("border-2 border-red-500", "border-t-4 rounded", "!p-2 p-4"),
        cn!([("bg-red-500/50", true), ("bg-blue-500", true)], "m-2 -mx-1"),
    ];
    for merged in samples {
        assert_eq!(cn!(&merged), merged);
    }
}

// --- theme color names ---

#[test]
fn test_theme_color_replaces_palette_color() {
    assert_eq!(cn!("text-red-500", "text-primary"), "text-primary");
    assert_eq!(cn!("bg-background", "bg-red-500"), "bg-red-500");
}

#[test]
fn test_theme_colors_conflict_with_each_other() {
    assert_eq!(
        cn!("text-gray-500", "text-muted-foreground"),
        "text-muted-foreground"
    );
    assert_eq!(cn!("border-red-500", "border-input"), "border-input");
    assert_eq!(cn!("ring-ring", "ring-blue-500"), "ring-blue-500");
    assert_eq!(cn!("bg-primary/90", "bg-secondary"), "bg-secondary");
}

#[test]
fn test_theme_color_keeps_other_text_utilities() {
    assert_eq!(
        cn!("text-sm text-center text-ellipsis", "text-primary"),
        "text-sm text-center text-ellipsis text-primary"
    );
    assert_eq!(
        cn!("border-2 border-dashed", "border-input"),
        "border-2 border-dashed border-input"
    );
    assert_eq!(cn!("shadow-md", "shadow-primary"), "shadow-md shadow-primary");
    assert_eq!(
        cn!("ring-2 ring-offset-2", "ring-ring"),
        "ring-2 ring-offset-2 ring-ring"
    );
}

// --- category table ---

#[test]
fn test_default_table_lookup() {
    let table = CategoryTable::tailwind();
    let id = |class: &str| table.category_of(class).map(|c| c.id.clone());
    assert_eq!(id("text-red-500").as_deref(), Some("text-color"));
    assert_eq!(id("text-sm").as_deref(), Some("font-size"));
    assert_eq!(id("text-center").as_deref(), Some("text-align"));
    assert_eq!(id("px-4").as_deref(), Some("px"));
    assert_eq!(id("text-primary").as_deref(), Some("text-color"));
    assert_eq!(id("text-ellipsis").as_deref(), Some("text-overflow"));
    assert_eq!(id("ring-offset-2").as_deref(), Some("ring-offset-w"));
    assert_eq!(id("card"), None);
}

#[test]
fn test_custom_table() {
    let table = CategoryTable::empty().with_category(
        ClassCategory::new("tone").prefix("tone", ValueKind::Keyword(&["warm", "cool"])),
    );
    let merger = ClassMerger::new(table);
    assert_eq!(merger.merge(["tone-warm x", "tone-cool"]), "x tone-cool");
    // nothing else is categorized
    assert_eq!(merger.merge(["p-2", "p-4"]), "p-2 p-4");
}

#[test]
fn test_extend_default_table() {
    let table = CategoryTable::tailwind()
        .with_category(ClassCategory::new("btn").exact(["btn-primary", "btn-secondary"]));
    let merger = ClassMerger::new(table);
    assert_eq!(merger.merge(["btn-primary p-2", "btn-secondary"]), "p-2 btn-secondary");
    assert_eq!(merger.merge(["p-2", "p-4"]), "p-4");
}

#[test]
fn test_custom_overrides() {
    let table = CategoryTable::empty()
        .with_category(
            ClassCategory::new("inset-all")
                .prefix("all", ValueKind::Number)
                .overrides(["inset-top"]),
        )
        .with_category(ClassCategory::new("inset-top").prefix("top", ValueKind::Number));
    let merger = ClassMerger::new(table);
    assert_eq!(merger.merge(["top-1", "all-2"]), "all-2");
    assert_eq!(merger.merge(["all-2", "top-1"]), "all-2 top-1");
}
