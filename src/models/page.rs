/// The section of the site currently on screen.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Page {
    #[default]
    Home,
    About,
    Academics,
    Admissions,
    Facilities,
    Gallery,
    Contact,
    SuccessStories,
}

impl Page {
    pub const ALL: [Page; 8] = [
        Self::Home,
        Self::About,
        Self::Academics,
        Self::Admissions,
        Self::Facilities,
        Self::Gallery,
        Self::Contact,
        Self::SuccessStories,
    ];

    /// Pages linked from the navbar, in display order.
    pub const NAV_LINKS: [Page; 7] = [
        Self::Home,
        Self::About,
        Self::Academics,
        Self::Admissions,
        Self::Facilities,
        Self::Gallery,
        Self::Contact,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Academics => "academics",
            Self::Admissions => "admissions",
            Self::Facilities => "facilities",
            Self::Gallery => "gallery",
            Self::Contact => "contact",
            Self::SuccessStories => "success-stories",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Academics => "Academics",
            Self::Admissions => "Admissions",
            Self::Facilities => "Facilities",
            Self::Gallery => "Gallery",
            Self::Contact => "Contact",
            Self::SuccessStories => "Success Stories",
        }
    }
}

impl std::fmt::Display for Page {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl PartialEq<&str> for Page {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl std::str::FromStr for Page {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|page| page.as_str() == wanted)
            .ok_or_else(|| format!("invalid page: {}", s))
    }
}
