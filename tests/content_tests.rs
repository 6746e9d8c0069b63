#[cfg(test)]
pub mod content_tests {
    use sgn_site::content::*;

    #[test]
    fn test_content_table_sizes() {
        assert_eq!(QUICK_STATS.len(), 4);
        assert_eq!(STUDENTS.len(), 4);
        assert_eq!(PROGRAMS.len(), 3);
        assert_eq!(CORE_VALUES.len(), 3);
        assert_eq!(PATHWAYS.len(), 4);
        assert_eq!(CALENDAR.len(), 4);
        assert_eq!(ADMISSION_STEPS.len(), 4);
        assert_eq!(FACILITIES.len(), 6);
        assert_eq!(GALLERY.len(), 9);
    }

    #[test]
    fn test_admission_steps_are_numbered_in_order() {
        let steps: Vec<_> = ADMISSION_STEPS.iter().map(|s| s.step).collect();
        assert_eq!(steps, ["01", "02", "03", "04"]);
    }

    #[test]
    fn test_gallery_titles_are_unique() {
        let mut titles: Vec<_> = GALLERY.iter().map(|image| image.title).collect();
        titles.sort_unstable();
        titles.dedup();
        assert_eq!(titles.len(), GALLERY.len());
    }

    #[test]
    fn test_images_are_https() {
        let sources = GALLERY
            .iter()
            .map(|image| image.src)
            .chain(STUDENTS.iter().map(|student| student.img))
            .chain([HERO_IMAGE, PRINCIPAL_IMAGE, MAP_IMAGE]);
        for src in sources {
            assert!(src.starts_with("https://"), "{src}");
        }
    }
}
