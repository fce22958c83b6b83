use angular_language_service::selector::{CssSelector, SelectorError, SelectorMatcher};

#[cfg(test)]
mod tests {
    use super::*;

    // Helper to get a selector for given properties
    fn get_selector_for(
        tag: Option<&str>,
        attrs: Vec<(&str, &str)>,
        classes: Option<&str>,
    ) -> CssSelector {
        let mut selector = CssSelector::new();
        if let Some(t) = tag {
            selector.set_element(t);
        }
        for (name, value) in attrs {
            selector.add_attribute(name, value);
        }
        if let Some(c) = classes {
            for c_name in c.trim().split_whitespace() {
                selector.add_class_name(c_name);
            }
        }
        selector
    }

    #[test]
    fn should_select_by_element_name_case_sensitive() {
        let mut matcher: SelectorMatcher<i32> = SelectorMatcher::new();
        let s1 = CssSelector::parse("someTag").unwrap();
        matcher.add_selectables(&s1, 1);

        let mut matched = Vec::new();
        {
            let mut collector = |s: &CssSelector, c: &i32| matched.push((s.clone(), *c));
            matcher.match_selector(
                &get_selector_for(Some("SOMEOTHERTAG"), vec![], None),
                &mut collector,
            );
        }
        assert!(matched.is_empty());

        {
            let mut collector = |s: &CssSelector, c: &i32| matched.push((s.clone(), *c));
            matcher.match_selector(
                &get_selector_for(Some("SOMETAG"), vec![], None),
                &mut collector,
            );
        }
        assert!(matched.is_empty());

        {
            let mut collector = |s: &CssSelector, c: &i32| matched.push((s.clone(), *c));
            matcher.match_selector(
                &get_selector_for(Some("someTag"), vec![], None),
                &mut collector,
            );
        }
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].1, 1);
    }

    #[test]
    fn should_select_by_class_name() {
        let mut matcher: SelectorMatcher<i32> = SelectorMatcher::new();
        matcher.add_selectables(&CssSelector::parse(".someClass").unwrap(), 1);
        matcher.add_selectables(&CssSelector::parse(".someClass.class2").unwrap(), 2);

        let mut matched = Vec::new();
        {
            let mut collector = |_s: &CssSelector, c: &i32| matched.push(*c);
            matcher.match_selector(
                &get_selector_for(None, vec![], Some("someClass")),
                &mut collector,
            );
        }
        assert_eq!(matched, vec![1]);

        matched.clear();
        {
            let mut collector = |_s: &CssSelector, c: &i32| matched.push(*c);
            matcher.match_selector(
                &get_selector_for(None, vec![], Some("someClass class2")),
                &mut collector,
            );
        }
        assert_eq!(matched, vec![1, 2]);
    }

    #[test]
    fn should_select_by_attr_name_only_once() {
        let mut matcher: SelectorMatcher<i32> = SelectorMatcher::new();
        let s1 = CssSelector::parse("[someAttr]").unwrap();
        matcher.add_selectables(&s1, 1);

        let mut matched = Vec::new();
        {
            let mut collector = |_s: &CssSelector, c: &i32| matched.push(*c);
            matcher.match_selector(
                &get_selector_for(None, vec![("someAttr", ""), ("someAttr", "someValue")], None),
                &mut collector,
            );
        }
        assert_eq!(matched, vec![1]);
    }

    #[test]
    fn should_select_by_attr_name_case_sensitive_and_value_case_insensitive() {
        let mut matcher: SelectorMatcher<i32> = SelectorMatcher::new();
        matcher.add_selectables(&CssSelector::parse("[someAttr=someValue]").unwrap(), 1);

        assert!(!matcher.match_selector(
            &get_selector_for(None, vec![("SOMEATTR", "SOMEVALUE")], None),
            |_, _| {},
        ));
        assert!(matcher.match_selector(
            &get_selector_for(None, vec![("someAttr", "SOMEVALUE")], None),
            |_, _| {},
        ));
    }

    #[test]
    fn should_not_select_with_non_matching_not_selector() {
        let mut matcher: SelectorMatcher<i32> = SelectorMatcher::new();
        matcher.add_selectables(&CssSelector::parse("p:not(.someClass)").unwrap(), 1);

        assert!(!matcher.match_selector(
            &get_selector_for(Some("p"), vec![], Some("someClass")),
            |_, _| {},
        ));
        assert!(matcher.match_selector(
            &get_selector_for(Some("p"), vec![], Some("otherClass")),
            |_, _| {},
        ));
    }

    #[test]
    fn should_select_by_universal_not_selector() {
        let mut matcher: SelectorMatcher<i32> = SelectorMatcher::new();
        matcher.add_selectables(&CssSelector::parse(":not(.someClass)").unwrap(), 1);

        assert!(matcher.match_selector(
            &get_selector_for(Some("div"), vec![], Some("otherClass")),
            |_, _| {},
        ));
        assert!(!matcher.match_selector(
            &get_selector_for(Some("div"), vec![], Some("someClass")),
            |_, _| {},
        ));
    }

    #[test]
    fn should_parse_multiple_selectors_and_match_each() {
        let mut matcher: SelectorMatcher<i32> = SelectorMatcher::new();
        let parts = CssSelector::parse("input[type=text], textarea").unwrap();
        assert_eq!(parts.len(), 2);
        matcher.add_selectables(&parts, 7);

        assert!(matcher.match_selector(
            &get_selector_for(Some("textarea"), vec![], None),
            |_, _| {},
        ));
        assert!(matcher.match_selector(
            &get_selector_for(Some("input"), vec![("type", "text")], None),
            |_, _| {},
        ));
        assert!(!matcher.match_selector(
            &get_selector_for(Some("input"), vec![("type", "radio")], None),
            |_, _| {},
        ));
    }

    #[test]
    fn should_reject_multiple_selectors_in_not() {
        assert_eq!(
            CssSelector::parse("div:not(.a, .b)"),
            Err(SelectorError::MultipleSelectorsInNot)
        );
    }

    #[test]
    fn should_format_selectors_back_to_text() {
        for text in ["my-component", "input[type=text]", "div.hero:not(.hidden)"] {
            let parts = CssSelector::parse(text).unwrap();
            assert_eq!(parts[0].to_string(), text);
        }
    }
}
