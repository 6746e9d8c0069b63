mod common;

#[cfg(test)]
pub mod navigation_tests {
    use sgn_site::content::QUICK_LINKS;
    use sgn_site::models::Page;
    use sgn_site::state::Navigator;

    #[test]
    fn test_navigator_starts_on_home() {
        let navigator = Navigator::new();
        assert_eq!(navigator.current(), Page::Home);
        assert!(!navigator.is_menu_open());
    }

    #[test]
    fn test_navigator_shows_last_requested_page() {
        let mut navigator = Navigator::new();
        let sequence = [
            Page::About,
            Page::Gallery,
            Page::Gallery,
            Page::Contact,
            Page::Home,
            Page::SuccessStories,
            Page::Admissions,
        ];
        for target in sequence {
            navigator.navigate_to(target);
            assert_eq!(navigator.current(), target);
            let active = Page::ALL.iter().filter(|p| navigator.is_active(**p)).count();
            assert_eq!(active, 1);
        }
    }

    #[test]
    fn test_navigator_reports_change() {
        let mut navigator = Navigator::new();
        assert!(navigator.navigate_to(Page::Facilities));
        assert!(!navigator.navigate_to(Page::Facilities));
    }

    #[test]
    fn test_navigator_closes_menu_on_navigation() {
        let mut navigator = Navigator::new();
        navigator.toggle_menu();
        assert!(navigator.is_menu_open());

        navigator.navigate_to(Page::Academics);
        assert!(!navigator.is_menu_open());

        navigator.toggle_menu();
        navigator.navigate_to(Page::Academics);
        assert!(!navigator.is_menu_open());
    }

    #[test]
    fn test_navigator_toggle_menu_twice() {
        let mut navigator = Navigator::new();
        navigator.toggle_menu();
        navigator.toggle_menu();
        assert!(!navigator.is_menu_open());
        navigator.toggle_menu();
        navigator.close_menu();
        assert!(!navigator.is_menu_open());
    }

    #[test]
    fn test_navigator_close_menu_keeps_page() {
        let mut navigator = Navigator::new();
        navigator.navigate_to(Page::Gallery);
        navigator.toggle_menu();
        navigator.close_menu();
        assert!(!navigator.is_menu_open());
        assert_eq!(navigator.current(), Page::Gallery);

        navigator.close_menu();
        assert!(!navigator.is_menu_open());
    }

    #[test]
    fn test_quick_links_resolve_to_pages() {
        let targets: Vec<_> = QUICK_LINKS.iter().map(|l| (l.label, l.target)).collect();
        assert_eq!(
            targets,
            [
                ("About Us", Page::About),
                ("Academics", Page::Academics),
                ("Admissions", Page::Admissions),
                ("Success Stories", Page::SuccessStories),
                ("Facilities", Page::Facilities),
                ("Gallery", Page::Gallery),
            ]
        );
    }
}
