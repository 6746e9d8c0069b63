mod common;

#[cfg(test)]
pub mod model_tests {
    use sgn_site::common::*;
    use sgn_site::models::*;

    use super::common::*;

    #[test]
    fn test_page_default_is_home() {
        assert_eq!(Page::default(), Page::Home);
    }

    #[test]
    fn test_page_from_str_success() {
        for page in Page::ALL {
            assert_eq!(page.as_str().parse::<Page>(), Ok(page));
        }
        assert_eq!("Success-Stories".parse::<Page>(), Ok(Page::SuccessStories));
    }

    #[test]
    fn test_page_from_str_fails_on_unknown() {
        assert!("blog".parse::<Page>().is_err());
    }

    #[test]
    fn test_page_nav_links_exclude_success_stories() {
        assert_eq!(Page::NAV_LINKS.len(), 7);
        assert!(!Page::NAV_LINKS.contains(&Page::SuccessStories));
        assert_eq!(Page::NAV_LINKS[0], Page::Home);
        assert_eq!(Page::NAV_LINKS[6], Page::Contact);
    }

    #[test]
    fn test_page_compares_with_str() {
        assert!(Page::SuccessStories == "success-stories");
        assert_eq!(Page::Gallery.to_string(), "gallery");
    }

    #[test]
    fn test_theme_toggled_twice_is_identity() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
    }

    #[test]
    fn test_theme_from_str() {
        assert_eq!("dark".parse::<Theme>(), Ok(Theme::Dark));
        assert_eq!(" Light ".parse::<Theme>(), Ok(Theme::Light));
        assert!("sepia".parse::<Theme>().is_err());
    }

    #[test]
    fn test_grade_labels_match_select_options() {
        let labels: Vec<_> = Grade::ALL.iter().map(|g| g.label()).collect();
        assert_eq!(
            labels,
            [
                "Pre-Primary (Nursery-UKG)",
                "Primary (Grades I-V)",
                "Middle (Grades VI-VIII)",
                "Senior (Grades IX-XII)",
            ]
        );
        assert_eq!("senior".parse::<Grade>(), Ok(Grade::Senior));
        assert!("".parse::<Grade>().is_err());
    }

    #[test]
    fn test_inquiry_validate_success() {
        assert_eq!(get_filled_inquiry().validate(), Ok(()));
    }

    #[test]
    fn test_inquiry_validate_fails_on_blank_name() {
        let inquiry = AdmissionInquiry {
            parent_name: "   ".into(),
            ..get_filled_inquiry()
        };
        assert_eq!(inquiry.validate(), Err(FormError::MissingField("parent_name")));
    }

    #[test]
    fn test_inquiry_validate_fails_on_missing_grade() {
        let inquiry = AdmissionInquiry {
            grade: None,
            ..get_filled_inquiry()
        };
        assert_eq!(inquiry.validate(), Err(FormError::MissingField("grade")));
    }

    #[test]
    fn test_inquiry_validate_fails_on_malformed_email() {
        for email in ["harpreet", "@example.com", "harpreet@", "a b@example.com", "a@@b.com"] {
            let inquiry = AdmissionInquiry {
                email: email.into(),
                ..get_filled_inquiry()
            };
            assert!(
                matches!(inquiry.validate(), Err(FormError::InvalidEmail(_))),
                "{email} should be rejected"
            );
        }
    }

    #[test]
    fn test_inquiry_is_empty() {
        assert!(AdmissionInquiry::default().is_empty());
        assert!(!get_filled_inquiry().is_empty());
    }

    #[test]
    fn test_message_validate_fails_on_each_missing_field() {
        let cases: [(&str, fn(&mut ContactMessage)); 4] = [
            ("name", |m| m.name.clear()),
            ("email", |m| m.email.clear()),
            ("subject", |m| m.subject.clear()),
            ("message", |m| m.message.clear()),
        ];
        for (field, clear) in cases {
            let mut message = get_filled_message();
            clear(&mut message);
            assert_eq!(message.validate(), Err(FormError::MissingField(field)));
        }
    }
}
