use super::*;

mod compile {
    use super::*;

    #[test]
    fn when_all_entries_are_valid_should_keep_them_in_order() {
        // Arrange & Act
        let list = AllowList::compile(["https://good.test", "http://localhost:*"])
            .expect("valid allow-list");

        // Assert
        let sources: Vec<&str> = list.patterns().iter().map(|p| p.as_str()).collect();
        assert_eq!(sources, ["https://good.test", "http://localhost:*"]);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn when_entry_is_invalid_should_fail_instead_of_skipping_it() {
        // Arrange & Act
        let result = AllowList::compile(["https://good.test", "", "https://other.test"]);

        // Assert
        assert!(matches!(result, Err(PatternError::Empty)));
    }

    #[test]
    fn when_iterator_is_empty_should_build_empty_list() {
        // Arrange & Act
        let list = AllowList::compile(Vec::<String>::new()).expect("empty allow-list");

        // Assert
        assert!(list.is_empty());
    }

    #[test]
    fn when_unconstrained_entry_is_present_should_still_accept_it() {
        // Arrange & Act
        let list = AllowList::compile(["https://*"]).expect("valid allow-list");

        // Assert
        assert!(list.matches("https://anything.test"));
    }
}

mod matches {
    use super::*;

    #[test]
    fn when_any_entry_matches_should_return_true() {
        // Arrange
        let list = AllowList::compile(["https://one.test", "https://*.two.test"])
            .expect("valid allow-list");

        // Act & Assert
        assert!(list.matches("https://api.two.test"));
        assert!(list.matches("https://one.test"));
    }

    #[test]
    fn when_no_entry_matches_should_return_false() {
        // Arrange
        let list = AllowList::compile(["https://good.test"]).expect("valid allow-list");

        // Act & Assert
        assert!(!list.matches("https://evil.test"));
    }

    #[test]
    fn when_list_is_empty_should_never_match() {
        // Arrange
        let list = AllowList::empty();

        // Act & Assert
        assert!(!list.matches("https://good.test"));
    }
}

mod find_match {
    use super::*;

    #[test]
    fn when_origin_matches_should_return_first_accepting_entry() {
        // Arrange
        let list = AllowList::compile(["https://*.good.test", "https://api.good.test"])
            .expect("valid allow-list");

        // Act
        let found = list.find_match("https://api.good.test");

        // Assert
        assert_eq!(found.map(|p| p.as_str()), Some("https://*.good.test"));
    }

    #[test]
    fn when_origin_does_not_match_should_return_none() {
        // Arrange
        let list = AllowList::compile(["https://good.test"]).expect("valid allow-list");

        // Act & Assert
        assert!(list.find_match("https://evil.test").is_none());
    }
}

mod shared_allow_list {
    use super::*;

    #[test]
    fn when_replaced_should_return_previous_list() {
        // Arrange
        let shared = SharedAllowList::new(
            AllowList::compile(["https://old.test"]).expect("valid allow-list"),
        );

        // Act
        let previous =
            shared.replace(AllowList::compile(["https://new.test"]).expect("valid allow-list"));

        // Assert
        assert!(previous.matches("https://old.test"));
        assert!(shared.load().matches("https://new.test"));
        assert!(!shared.load().matches("https://old.test"));
    }

    #[test]
    fn when_snapshot_taken_before_replace_should_keep_old_contents() {
        // Arrange
        let shared = SharedAllowList::new(
            AllowList::compile(["https://old.test"]).expect("valid allow-list"),
        );
        let snapshot = shared.load();

        // Act
        shared.replace(AllowList::empty());

        // Assert
        assert!(snapshot.matches("https://old.test"));
        assert!(shared.load().is_empty());
    }

    #[test]
    fn when_defaulted_should_hold_empty_list() {
        // Arrange & Act
        let shared = SharedAllowList::default();

        // Assert
        assert!(shared.load().is_empty());
    }
}
