//! Integration tests for fluent selector construction.

use quokka_selector::{
    Combinator, Selector, SelectorError, attr, class, combine, element, id, pseudo_class,
    pseudo_element,
};

// =============================================================================
// Fragment Rendering
// [§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound)
// =============================================================================

#[test]
fn test_element_renders_bare_name() {
    assert_eq!(element("div").stringify(), "div");
}

#[test]
fn test_id_renders_hash_marker() {
    assert_eq!(id("main").stringify(), "#main");
}

#[test]
fn test_class_renders_dot_marker() {
    assert_eq!(class("container").stringify(), ".container");
}

#[test]
fn test_attr_renders_bracket_wrapper() {
    assert_eq!(attr("href").stringify(), "[href]");
    assert_eq!(attr(r#"href$=".png""#).stringify(), r#"[href$=".png"]"#);
}

#[test]
fn test_pseudo_class_renders_single_colon() {
    assert_eq!(pseudo_class("focus").stringify(), ":focus");
    // Functional forms pass through verbatim
    assert_eq!(
        pseudo_class("nth-of-type(even)").stringify(),
        ":nth-of-type(even)"
    );
}

#[test]
fn test_pseudo_element_renders_double_colon() {
    assert_eq!(pseudo_element("before").stringify(), "::before");
}

#[test]
fn test_full_compound_chain() {
    let selector = element("input")
        .id("login")
        .unwrap()
        .class("wide")
        .unwrap()
        .attr(r#"type="text""#)
        .unwrap()
        .pseudo_class("focus")
        .unwrap()
        .pseudo_element("placeholder")
        .unwrap();
    assert_eq!(
        selector.stringify(),
        r#"input#login.wide[type="text"]:focus::placeholder"#
    );
}

#[test]
fn test_id_then_repeated_classes() {
    let selector = id("main").class("container").unwrap().class("editable").unwrap();
    assert_eq!(selector.stringify(), "#main.container.editable");
}

#[test]
fn test_element_attr_pseudo_class() {
    let selector = element("a")
        .attr(r#"href$=".png""#)
        .unwrap()
        .pseudo_class("focus")
        .unwrap();
    assert_eq!(selector.stringify(), r#"a[href$=".png"]:focus"#);
}

#[test]
fn test_empty_root_stringifies_empty() {
    assert_eq!(Selector::new().stringify(), "");
    assert_eq!(Selector::default().stringify(), "");
}

#[test]
fn test_display_matches_stringify() {
    let selector = element("div").class("nav").unwrap();
    assert_eq!(format!("{selector}"), selector.stringify());
}

#[test]
fn test_stringify_is_repeatable() {
    let selector = id("main").class("container").unwrap();
    assert_eq!(selector.stringify(), selector.stringify());
}

// =============================================================================
// Ordering Validation
// =============================================================================

#[test]
fn test_id_before_element_fails() {
    assert_eq!(id("id").element("div"), Err(SelectorError::OutOfOrder));
}

#[test]
fn test_class_before_element_fails() {
    assert_eq!(class("nav").element("ul"), Err(SelectorError::OutOfOrder));
}

#[test]
fn test_class_before_id_fails() {
    assert_eq!(class("nav").id("main"), Err(SelectorError::OutOfOrder));
}

#[test]
fn test_attr_before_class_fails() {
    assert_eq!(attr("href").class("link"), Err(SelectorError::OutOfOrder));
}

#[test]
fn test_pseudo_class_before_attr_fails() {
    assert_eq!(
        pseudo_class("focus").attr("href"),
        Err(SelectorError::OutOfOrder)
    );
}

#[test]
fn test_pseudo_element_before_pseudo_class_fails() {
    assert_eq!(
        pseudo_element("before").pseudo_class("hover"),
        Err(SelectorError::OutOfOrder)
    );
}

#[test]
fn test_equal_categories_in_a_row_are_allowed() {
    let selector = element("input")
        .attr("type=\"radio\"")
        .unwrap()
        .attr("checked")
        .unwrap()
        .pseudo_class("focus")
        .unwrap()
        .pseudo_class("hover")
        .unwrap();
    assert_eq!(
        selector.stringify(),
        "input[type=\"radio\"][checked]:focus:hover"
    );
}

#[test]
fn test_order_check_runs_before_duplicate_check() {
    // element after id is out of order even though an element is also
    // already present
    let selector = element("div").id("main").unwrap();
    assert_eq!(selector.element("span"), Err(SelectorError::OutOfOrder));
}

// =============================================================================
// Singleton Validation
// =============================================================================

#[test]
fn test_duplicate_element_fails() {
    assert_eq!(
        element("div").element("span"),
        Err(SelectorError::DuplicatePart)
    );
}

#[test]
fn test_duplicate_id_fails() {
    assert_eq!(id("main").id("other"), Err(SelectorError::DuplicatePart));
}

#[test]
fn test_duplicate_pseudo_element_fails() {
    assert_eq!(
        pseudo_element("before").pseudo_element("after"),
        Err(SelectorError::DuplicatePart)
    );
}

#[test]
fn test_second_id_after_classes_is_out_of_order() {
    // The order check fires before the singleton cap is consulted
    let selector = id("main").class("a").unwrap().class("b").unwrap();
    assert_eq!(selector.id("other"), Err(SelectorError::OutOfOrder));
}

#[test]
fn test_repeated_classes_never_fail() {
    let mut selector = Selector::new();
    for name in ["a", "b", "c", "d", "e"] {
        selector = selector.class(name).unwrap();
    }
    assert_eq!(selector.stringify(), ".a.b.c.d.e");
}

// =============================================================================
// Combination
// [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)
// =============================================================================

#[test]
fn test_combine_pads_token_with_single_spaces() {
    let combined = combine(
        &element("div").id("main").unwrap(),
        "+",
        &element("table").id("data").unwrap(),
    );
    assert_eq!(combined.stringify(), "div#main + table#data");
}

#[test]
fn test_combine_equals_operand_texts_joined_by_padded_token() {
    let left = element("ul").class("nav").unwrap();
    let right = element("li");
    let combined = combine(&left, ">", &right);
    assert_eq!(
        combined.stringify(),
        format!("{} > {}", left.stringify(), right.stringify())
    );
}

#[test]
fn test_descendant_combinator_renders_three_spaces() {
    // " " padded with one space on each side
    let combined = combine(&element("tr"), " ", &element("td"));
    assert_eq!(combined.stringify(), "tr   td");
}

#[test]
fn test_combinator_tokens_are_not_validated() {
    let combined = combine(&element("div"), ">>>", &element("span"));
    assert_eq!(combined.stringify(), "div >>> span");
}

#[test]
fn test_combine_accepts_typed_combinator_tokens() {
    let combined = combine(
        &element("h1"),
        Combinator::SubsequentSibling.as_str(),
        &element("p"),
    );
    assert_eq!(combined.stringify(), "h1 ~ p");
}

#[test]
fn test_nested_combination() {
    let innermost = combine(
        &element("tr").pseudo_class("nth-of-type(even)").unwrap(),
        " ",
        &element("td").pseudo_class("nth-of-type(even)").unwrap(),
    );
    let middle = combine(&element("table").id("data").unwrap(), "~", &innermost);
    let combined = combine(
        &element("div")
            .id("main")
            .unwrap()
            .class("container")
            .unwrap()
            .class("draggable")
            .unwrap(),
        "+",
        &middle,
    );
    assert_eq!(
        combined.stringify(),
        "div#main.container.draggable + table#data ~ tr:nth-of-type(even)   td:nth-of-type(even)"
    );
}

#[test]
fn test_combined_selector_accepts_fresh_fragments() {
    // History and counters reset on combination, so a second element
    // fragment is accepted and validated from scratch
    let combined = combine(&element("div"), ">", &element("span"));
    let extended = combined.element("em").unwrap();
    assert_eq!(extended.stringify(), "div > spanem");
    // ...and the fresh compound enforces its own singleton cap
    assert_eq!(extended.element("strong"), Err(SelectorError::DuplicatePart));
}

// =============================================================================
// Value Semantics
// =============================================================================

#[test]
fn test_root_value_seeds_independent_chains() {
    let root = Selector::new();
    let first = root.class("alpha").unwrap();
    let second = root.class("beta").unwrap();

    assert_eq!(first.stringify(), ".alpha");
    assert_eq!(second.stringify(), ".beta");
    assert_eq!(root.stringify(), "");
}

#[test]
fn test_operations_do_not_mutate_the_receiver() {
    let base = element("div");
    let _ = base.class("extra").unwrap();
    assert_eq!(base.stringify(), "div");
}

#[test]
fn test_failed_operations_leave_the_receiver_usable() {
    let base = element("div");
    assert_eq!(base.element("span"), Err(SelectorError::DuplicatePart));
    // The receiver is unchanged and still accepts valid fragments
    assert_eq!(base.class("wide").unwrap().stringify(), "div.wide");
}

#[test]
fn test_combine_does_not_consume_operands() {
    let left = element("div");
    let right = element("span");
    let _ = combine(&left, ">", &right);
    assert_eq!(left.stringify(), "div");
    assert_eq!(right.stringify(), "span");
}

// =============================================================================
// Error Contract
// =============================================================================

#[test]
fn test_out_of_order_message() {
    assert_eq!(
        SelectorError::OutOfOrder.to_string(),
        "Selector parts should be arranged in the following order: element, id, class, attribute, pseudo-class, pseudo-element"
    );
}

#[test]
fn test_duplicate_part_message() {
    assert_eq!(
        SelectorError::DuplicatePart.to_string(),
        "Element, id and pseudo-element should not occur more then one time inside the selector"
    );
}

#[test]
fn test_errors_propagate_through_chains() {
    fn build() -> Result<Selector, SelectorError> {
        let selector = element("div").class("nav")?.id("main")?;
        Ok(selector)
    }
    assert_eq!(build(), Err(SelectorError::OutOfOrder));
}
