//! Enumerated message keys.
//!
//! Every piece of translated copy the site renders is addressed by a [`Key`].
//! [`Key::all`] enumerates the complete key space, which lets a message table
//! be checked for completeness when it is loaded instead of when a page
//! happens to be rendered.

use std::fmt;

/// Declares a closed set of key segments with their message-file spelling.
macro_rules! key_segments {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $segment:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// All variants in declaration order
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Spelling of this segment inside a dotted key
            pub fn segment(self) -> &'static str {
                match self {
                    $($name::$variant => $segment),+
                }
            }
        }
    };
}

key_segments!(NavKey {
    Home => "home",
    Platforms => "platforms",
    Talent => "talent",
    Erp => "erp",
    Rental => "rental",
    Legal => "legal",
    Imprint => "imprint",
    Privacy => "privacy",
    Terms => "terms",
    Menu => "menu",
    Language => "language",
});

key_segments!(FooterKey {
    Tagline => "tagline",
    Copyright => "copyright",
    MadeWith => "madeWith",
});

key_segments!(HeroKey {
    Badge => "badge",
    Cta => "cta",
    CtaSecondary => "ctaSecondary",
    Scroll => "scroll",
});

key_segments!(MissionKey {
    Statement => "statement",
    Tagline => "tagline",
    TaglineEnd => "taglineEnd",
});

key_segments!(BusinessAreasKey {
    Subtitle => "subtitle",
    Title => "title",
});

key_segments!(
    /// Cards in the home page's business area grid
    BusinessArea {
        Sparring => "sparring",
        Talent => "talent",
        Platforms => "platforms",
    }
);

key_segments!(CardField {
    Title => "title",
    Description => "description",
    Features => "features",
});

key_segments!(AboutKey {
    Label => "label",
    Title => "title",
    Description => "description",
});

key_segments!(CompanyValue {
    Quality => "quality",
    Innovation => "innovation",
    Partnership => "partnership",
});

key_segments!(TextField {
    Title => "title",
    Description => "description",
});

key_segments!(CtaKey {
    Title => "title",
    Description => "description",
    Button => "button",
});

key_segments!(CommonKey {
    ContactUs => "contactUs",
    LearnMore => "learnMore",
});

key_segments!(PlatformsKey {
    Title => "title",
    Subtitle => "subtitle",
});

key_segments!(
    /// Starter templates showcased under `/plattformen`
    Platform {
        Erp => "erp",
        Rental => "rental",
    }
);

key_segments!(PlatformField {
    Title => "title",
    Subtitle => "subtitle",
    Description => "description",
});

key_segments!(PlatformFeature {
    Modular => "modular",
    Integration => "integration",
    Analytics => "analytics",
    Cloud => "cloud",
    Booking => "booking",
    Inventory => "inventory",
    Billing => "billing",
    Reporting => "reporting",
});

key_segments!(TalentKey {
    Subtitle => "subtitle",
    Title => "title",
    Description => "description",
    TeamTitle => "team.title",
});

key_segments!(Role {
    Developer => "developer",
    Consultant => "consultant",
    Architect => "architect",
    Qa => "qa",
});

key_segments!(ImprintKey {
    Title => "title",
    Company => "company",
    Country => "country",
    Represented => "represented",
    ManagingDirector => "managingDirector",
    Contact => "contact",
    Phone => "phone",
    Email => "email",
    Registration => "registration",
    RegisterCourt => "registerCourt",
    RegisterNumber => "registerNumber",
    Vat => "vat",
    VatId => "vatId",
    Responsibility => "responsibility",
    Dispute => "dispute",
    DisputeText => "disputeText",
});

key_segments!(PrivacyKey {
    Title => "title",
    LastUpdated => "lastUpdated",
    Intro => "intro",
});

key_segments!(PrivacySection {
    Responsible => "responsible",
    Legal => "legal",
    Ssl => "ssl",
    Hosting => "hosting",
    Logs => "logs",
    Cookies => "cookies",
    Contact => "contact",
    Retention => "retention",
    Rights => "rights",
    Fonts => "fonts",
});

key_segments!(TermsKey {
    Title => "title",
});

key_segments!(TermsSection {
    Scope => "scope",
    Contract => "contract",
    Services => "services",
    Payment => "payment",
    Liability => "liability",
    Confidentiality => "confidentiality",
    Ip => "ip",
    Final => "final",
});

key_segments!(SectionField {
    Title => "title",
    Content => "content",
});

key_segments!(NotFoundKey {
    Title => "title",
    Description => "description",
    BackHome => "backHome",
});

impl Platform {
    /// Feature cards of this platform's detail page, in display order
    pub fn features(self) -> &'static [PlatformFeature] {
        match self {
            Platform::Erp => &[
                PlatformFeature::Modular,
                PlatformFeature::Integration,
                PlatformFeature::Analytics,
                PlatformFeature::Cloud,
            ],
            Platform::Rental => &[
                PlatformFeature::Booking,
                PlatformFeature::Inventory,
                PlatformFeature::Billing,
                PlatformFeature::Reporting,
            ],
        }
    }
}

impl PlatformFeature {
    pub fn platform(self) -> Platform {
        match self {
            PlatformFeature::Modular
            | PlatformFeature::Integration
            | PlatformFeature::Analytics
            | PlatformFeature::Cloud => Platform::Erp,
            PlatformFeature::Booking
            | PlatformFeature::Inventory
            | PlatformFeature::Billing
            | PlatformFeature::Reporting => Platform::Rental,
        }
    }
}

/// Shape a message must have
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Text,
    List,
}

/// Address of one translated message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Nav(NavKey),
    Footer(FooterKey),
    Hero(HeroKey),
    Mission(MissionKey),
    BusinessAreas(BusinessAreasKey),
    BusinessArea(BusinessArea, CardField),
    About(AboutKey),
    Value(CompanyValue, TextField),
    Cta(CtaKey),
    Common(CommonKey),
    Platforms(PlatformsKey),
    Platform(Platform, PlatformField),
    Feature(PlatformFeature, TextField),
    Talent(TalentKey),
    Role(Role, TextField),
    Imprint(ImprintKey),
    Privacy(PrivacyKey),
    PrivacySection(PrivacySection, SectionField),
    Terms(TermsKey),
    TermsSection(TermsSection, SectionField),
    NotFound(NotFoundKey),
}

impl Key {
    /// Dotted path of this key inside a message file
    pub fn path(&self) -> String {
        match *self {
            Key::Nav(k) => format!("nav.{}", k.segment()),
            Key::Footer(k) => format!("footer.{}", k.segment()),
            Key::Hero(k) => format!("hero.{}", k.segment()),
            Key::Mission(k) => format!("mission.{}", k.segment()),
            Key::BusinessAreas(k) => format!("businessAreas.{}", k.segment()),
            Key::BusinessArea(area, field) => {
                format!("businessAreas.{}.{}", area.segment(), field.segment())
            }
            Key::About(k) => format!("about.{}", k.segment()),
            Key::Value(value, field) => {
                format!("about.values.{}.{}", value.segment(), field.segment())
            }
            Key::Cta(k) => format!("cta.{}", k.segment()),
            Key::Common(k) => format!("common.{}", k.segment()),
            Key::Platforms(k) => format!("platforms.{}", k.segment()),
            Key::Platform(platform, field) => {
                format!("platforms.{}.{}", platform.segment(), field.segment())
            }
            Key::Feature(feature, field) => format!(
                "platforms.{}.features.{}.{}",
                feature.platform().segment(),
                feature.segment(),
                field.segment()
            ),
            Key::Talent(k) => format!("talent.{}", k.segment()),
            Key::Role(role, field) => {
                format!("talent.roles.{}.{}", role.segment(), field.segment())
            }
            Key::Imprint(k) => format!("legal.imprint.{}", k.segment()),
            Key::Privacy(k) => format!("legal.privacy.{}", k.segment()),
            Key::PrivacySection(section, field) => format!(
                "legal.privacy.sections.{}.{}",
                section.segment(),
                field.segment()
            ),
            Key::Terms(k) => format!("legal.terms.{}", k.segment()),
            Key::TermsSection(section, field) => format!(
                "legal.terms.sections.{}.{}",
                section.segment(),
                field.segment()
            ),
            Key::NotFound(k) => format!("notFound.{}", k.segment()),
        }
    }

    pub fn kind(&self) -> MessageKind {
        match self {
            Key::BusinessArea(_, CardField::Features) => MessageKind::List,
            _ => MessageKind::Text,
        }
    }

    /// Variables a translation of this key is expected to reference
    pub fn placeholders(&self) -> &'static [&'static str] {
        match self {
            Key::Footer(FooterKey::Copyright) => &["year"],
            _ => &[],
        }
    }

    /// The complete key space, grouped by namespace
    pub fn all() -> Vec<Key> {
        let mut keys = Vec::new();

        keys.extend(NavKey::ALL.iter().map(|&k| Key::Nav(k)));
        keys.extend(FooterKey::ALL.iter().map(|&k| Key::Footer(k)));
        keys.extend(HeroKey::ALL.iter().map(|&k| Key::Hero(k)));
        keys.extend(MissionKey::ALL.iter().map(|&k| Key::Mission(k)));
        keys.extend(BusinessAreasKey::ALL.iter().map(|&k| Key::BusinessAreas(k)));
        for &area in BusinessArea::ALL {
            keys.extend(CardField::ALL.iter().map(|&f| Key::BusinessArea(area, f)));
        }
        keys.extend(AboutKey::ALL.iter().map(|&k| Key::About(k)));
        for &value in CompanyValue::ALL {
            keys.extend(TextField::ALL.iter().map(|&f| Key::Value(value, f)));
        }
        keys.extend(CtaKey::ALL.iter().map(|&k| Key::Cta(k)));
        keys.extend(CommonKey::ALL.iter().map(|&k| Key::Common(k)));
        keys.extend(PlatformsKey::ALL.iter().map(|&k| Key::Platforms(k)));
        for &platform in Platform::ALL {
            keys.extend(PlatformField::ALL.iter().map(|&f| Key::Platform(platform, f)));
        }
        for &feature in PlatformFeature::ALL {
            keys.extend(TextField::ALL.iter().map(|&f| Key::Feature(feature, f)));
        }
        keys.extend(TalentKey::ALL.iter().map(|&k| Key::Talent(k)));
        for &role in Role::ALL {
            keys.extend(TextField::ALL.iter().map(|&f| Key::Role(role, f)));
        }
        keys.extend(ImprintKey::ALL.iter().map(|&k| Key::Imprint(k)));
        keys.extend(PrivacyKey::ALL.iter().map(|&k| Key::Privacy(k)));
        for &section in PrivacySection::ALL {
            keys.extend(SectionField::ALL.iter().map(|&f| Key::PrivacySection(section, f)));
        }
        keys.extend(TermsKey::ALL.iter().map(|&k| Key::Terms(k)));
        for &section in TermsSection::ALL {
            keys.extend(SectionField::ALL.iter().map(|&f| Key::TermsSection(section, f)));
        }
        keys.extend(NotFoundKey::ALL.iter().map(|&k| Key::NotFound(k)));

        keys
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
