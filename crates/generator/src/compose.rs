//! Page composer.
//!
//! Each page has a fixed descriptor: an ordered list of [`SectionId`]s.
//! Composing a page walks that list in declaration order and resolves every
//! section's copy through the catalog. The result is plain data; turning it
//! into HTML is the job of [`crate::sections`].

use couture_core::keys::*;
use couture_core::{Catalog, Key, Locale, Page, Result, Route, Site, SiteConfig};

/// Sections a page can be built from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionId {
    Hero,
    BusinessAreas,
    Values,
    CallToAction,
    PlatformsHeader,
    PlatformOverview,
    PlatformHeader(Platform),
    PlatformFeatures(Platform),
    TalentHeader,
    Roles,
    Team,
    Contact,
    Imprint,
    PrivacyHeader,
    PrivacySections,
    TermsHeader,
    TermsSections,
}

/// The page descriptor: sections of `page` in display order
pub fn descriptor(page: Page) -> &'static [SectionId] {
    use SectionId::*;

    match page {
        Page::Home => &[Hero, BusinessAreas, Values, CallToAction],
        Page::Platforms => &[PlatformsHeader, PlatformOverview],
        Page::Erp => &[
            PlatformHeader(Platform::Erp),
            PlatformFeatures(Platform::Erp),
            Contact,
        ],
        Page::Rental => &[
            PlatformHeader(Platform::Rental),
            PlatformFeatures(Platform::Rental),
            Contact,
        ],
        Page::Talent => &[TalentHeader, Roles, Team, Contact],
        Page::Imprint => &[Imprint],
        Page::Privacy => &[PrivacyHeader, PrivacySections],
        Page::Terms => &[TermsHeader, TermsSections],
    }
}

/// Brand accent used for a card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accent {
    Coral,
    Teal,
    Violet,
    Amber,
    Mint,
}

impl Accent {
    pub fn class(self) -> &'static str {
        match self {
            Accent::Coral => "accent-coral",
            Accent::Teal => "accent-teal",
            Accent::Violet => "accent-violet",
            Accent::Amber => "accent-amber",
            Accent::Mint => "accent-mint",
        }
    }
}

/// Visual treatment of a card grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardStyle {
    Bento,
    Value,
    Platform,
    Feature,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Hero {
    pub badge: String,
    pub badge_href: Option<String>,
    pub statement: String,
    pub tagline: String,
    pub tagline_end: String,
    pub cta: String,
    pub cta_secondary: String,
    pub scroll: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PageHeader {
    pub eyebrow: Option<String>,
    pub title: String,
    pub lead: Option<String>,
    pub note: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    /// Descriptor key, e.g. `booking`
    pub key: &'static str,
    pub title: String,
    pub subtitle: Option<String>,
    pub description: String,
    pub items: Vec<String>,
    pub href: Option<String>,
    pub external: bool,
    pub link_label: Option<String>,
    pub accent: Accent,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CardGrid {
    /// Fragment id so other sections can link here
    pub anchor: Option<&'static str>,
    pub eyebrow: Option<String>,
    pub title: Option<String>,
    pub intro: Option<String>,
    pub style: CardStyle,
    pub cards: Vec<Card>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TeamCard {
    pub id: String,
    pub initial: String,
    pub name: String,
    pub role: String,
    pub description: String,
    pub accent: Accent,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TeamSection {
    pub title: String,
    pub members: Vec<TeamCard>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CallToAction {
    pub title: String,
    pub description: String,
    pub button: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContactButton {
    pub label: String,
    pub href: String,
}

/// One heading with its lines in the imprint
#[derive(Debug, Clone, PartialEq)]
pub struct ImprintEntry {
    pub heading: String,
    pub lines: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImprintBlock {
    pub title: String,
    pub entries: Vec<ImprintEntry>,
}

/// A legal section: heading plus Markdown body
#[derive(Debug, Clone, PartialEq)]
pub struct ProseBlock {
    pub anchor: &'static str,
    pub heading: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Section {
    Hero(Hero),
    Header(PageHeader),
    CardGrid(CardGrid),
    Team(TeamSection),
    CallToAction(CallToAction),
    Contact(ContactButton),
    Imprint(ImprintBlock),
    Prose(Vec<ProseBlock>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ComposedSection {
    pub id: SectionId,
    pub content: Section,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ComposedPage {
    pub route: Route,
    pub sections: Vec<ComposedSection>,
}

impl ComposedPage {
    pub fn section_ids(&self) -> Vec<SectionId> {
        self.sections.iter().map(|s| s.id).collect()
    }
}

/// Compose `page` in `locale` from its descriptor
pub fn compose_page(site: &Site, page: Page, locale: Locale) -> Result<ComposedPage> {
    let composer = Composer {
        catalog: &site.catalog,
        config: &site.config,
        locale,
    };

    let sections = descriptor(page)
        .iter()
        .map(|&id| {
            Ok(ComposedSection {
                id,
                content: composer.section(id)?,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(ComposedPage {
        route: Route::new(locale, page),
        sections,
    })
}

struct Composer<'a> {
    catalog: &'a Catalog,
    config: &'a SiteConfig,
    locale: Locale,
}

impl Composer<'_> {
    fn t(&self, key: Key) -> Result<String> {
        self.catalog.text(self.locale, key).map(str::to_string)
    }

    fn list(&self, key: Key) -> Result<Vec<String>> {
        self.catalog.list(self.locale, key).map(<[String]>::to_vec)
    }

    fn section(&self, id: SectionId) -> Result<Section> {
        Ok(match id {
            SectionId::Hero => Section::Hero(self.hero()?),
            SectionId::BusinessAreas => Section::CardGrid(self.business_areas()?),
            SectionId::Values => Section::CardGrid(self.values()?),
            SectionId::CallToAction => Section::CallToAction(CallToAction {
                title: self.t(Key::Cta(CtaKey::Title))?,
                description: self.t(Key::Cta(CtaKey::Description))?,
                button: self.t(Key::Cta(CtaKey::Button))?,
                href: self.config.mailto(),
            }),
            SectionId::PlatformsHeader => Section::Header(PageHeader {
                eyebrow: None,
                title: self.t(Key::Platforms(PlatformsKey::Title))?,
                lead: Some(self.t(Key::Platforms(PlatformsKey::Subtitle))?),
                note: None,
            }),
            SectionId::PlatformOverview => Section::CardGrid(self.platform_overview()?),
            SectionId::PlatformHeader(platform) => Section::Header(PageHeader {
                eyebrow: Some(self.t(Key::Platform(platform, PlatformField::Subtitle))?),
                title: self.t(Key::Platform(platform, PlatformField::Title))?,
                lead: Some(self.t(Key::Platform(platform, PlatformField::Description))?),
                note: None,
            }),
            SectionId::PlatformFeatures(platform) => {
                Section::CardGrid(self.platform_features(platform)?)
            }
            SectionId::TalentHeader => Section::Header(PageHeader {
                eyebrow: Some(self.t(Key::Talent(TalentKey::Subtitle))?),
                title: self.t(Key::Talent(TalentKey::Title))?,
                lead: Some(self.t(Key::Talent(TalentKey::Description))?),
                note: None,
            }),
            SectionId::Roles => Section::CardGrid(self.roles()?),
            SectionId::Team => Section::Team(self.team()?),
            SectionId::Contact => Section::Contact(ContactButton {
                label: self.t(Key::Common(CommonKey::ContactUs))?,
                href: self.config.mailto(),
            }),
            SectionId::Imprint => Section::Imprint(self.imprint()?),
            SectionId::PrivacyHeader => Section::Header(PageHeader {
                eyebrow: None,
                title: self.t(Key::Privacy(PrivacyKey::Title))?,
                lead: Some(self.t(Key::Privacy(PrivacyKey::Intro))?),
                note: Some(self.t(Key::Privacy(PrivacyKey::LastUpdated))?),
            }),
            SectionId::PrivacySections => Section::Prose(
                PrivacySection::ALL
                    .iter()
                    .map(|&s| {
                        Ok(ProseBlock {
                            anchor: s.segment(),
                            heading: self.t(Key::PrivacySection(s, SectionField::Title))?,
                            body: self.t(Key::PrivacySection(s, SectionField::Content))?,
                        })
                    })
                    .collect::<Result<Vec<_>>>()?,
            ),
            SectionId::TermsHeader => Section::Header(PageHeader {
                eyebrow: None,
                title: self.t(Key::Terms(TermsKey::Title))?,
                lead: None,
                note: None,
            }),
            SectionId::TermsSections => Section::Prose(
                TermsSection::ALL
                    .iter()
                    .map(|&s| {
                        Ok(ProseBlock {
                            anchor: s.segment(),
                            heading: self.t(Key::TermsSection(s, SectionField::Title))?,
                            body: self.t(Key::TermsSection(s, SectionField::Content))?,
                        })
                    })
                    .collect::<Result<Vec<_>>>()?,
            ),
        })
    }

    fn hero(&self) -> Result<Hero> {
        Ok(Hero {
            badge: self.t(Key::Hero(HeroKey::Badge))?,
            badge_href: self.config.links.sparring.clone(),
            statement: self.t(Key::Mission(MissionKey::Statement))?,
            tagline: self.t(Key::Mission(MissionKey::Tagline))?,
            tagline_end: self.t(Key::Mission(MissionKey::TaglineEnd))?,
            cta: self.t(Key::Hero(HeroKey::Cta))?,
            cta_secondary: self.t(Key::Hero(HeroKey::CtaSecondary))?,
            scroll: self.t(Key::Hero(HeroKey::Scroll))?,
        })
    }

    fn business_areas(&self) -> Result<CardGrid> {
        let cards = BusinessArea::ALL
            .iter()
            .map(|&area| {
                let (href, external, accent) = match area {
                    BusinessArea::Sparring => {
                        (self.config.links.sparring.clone(), true, Accent::Coral)
                    }
                    BusinessArea::Talent => {
                        (Some(Page::Talent.path(self.locale)), false, Accent::Teal)
                    }
                    BusinessArea::Platforms => {
                        (Some(Page::Platforms.path(self.locale)), false, Accent::Violet)
                    }
                };
                Ok(Card {
                    key: area.segment(),
                    title: self.t(Key::BusinessArea(area, CardField::Title))?,
                    subtitle: None,
                    description: self.t(Key::BusinessArea(area, CardField::Description))?,
                    items: self.list(Key::BusinessArea(area, CardField::Features))?,
                    href,
                    external,
                    link_label: None,
                    accent,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(CardGrid {
            anchor: Some("business-areas"),
            eyebrow: Some(self.t(Key::BusinessAreas(BusinessAreasKey::Subtitle))?),
            title: Some(self.t(Key::BusinessAreas(BusinessAreasKey::Title))?),
            intro: None,
            style: CardStyle::Bento,
            cards,
        })
    }

    fn values(&self) -> Result<CardGrid> {
        let cards = CompanyValue::ALL
            .iter()
            .map(|&value| {
                let accent = match value {
                    CompanyValue::Quality => Accent::Teal,
                    CompanyValue::Innovation => Accent::Coral,
                    CompanyValue::Partnership => Accent::Violet,
                };
                self.text_card(
                    value.segment(),
                    Key::Value(value, TextField::Title),
                    Key::Value(value, TextField::Description),
                    accent,
                )
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(CardGrid {
            anchor: None,
            eyebrow: Some(self.t(Key::About(AboutKey::Label))?),
            title: Some(self.t(Key::About(AboutKey::Title))?),
            intro: Some(self.t(Key::About(AboutKey::Description))?),
            style: CardStyle::Value,
            cards,
        })
    }

    fn platform_overview(&self) -> Result<CardGrid> {
        let learn_more = self.t(Key::Common(CommonKey::LearnMore))?;
        let cards = Platform::ALL
            .iter()
            .map(|&platform| {
                let page = match platform {
                    Platform::Erp => Page::Erp,
                    Platform::Rental => Page::Rental,
                };
                Ok(Card {
                    key: platform.segment(),
                    title: self.t(Key::Platform(platform, PlatformField::Title))?,
                    subtitle: Some(self.t(Key::Platform(platform, PlatformField::Subtitle))?),
                    description: self.t(Key::Platform(platform, PlatformField::Description))?,
                    items: Vec::new(),
                    href: Some(page.path(self.locale)),
                    external: false,
                    link_label: Some(learn_more.clone()),
                    accent: platform_accent(platform),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(CardGrid {
            anchor: None,
            eyebrow: None,
            title: None,
            intro: None,
            style: CardStyle::Platform,
            cards,
        })
    }

    fn platform_features(&self, platform: Platform) -> Result<CardGrid> {
        let cards = platform
            .features()
            .iter()
            .map(|&feature| {
                self.text_card(
                    feature.segment(),
                    Key::Feature(feature, TextField::Title),
                    Key::Feature(feature, TextField::Description),
                    platform_accent(platform),
                )
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(CardGrid {
            anchor: Some("features"),
            eyebrow: None,
            title: None,
            intro: None,
            style: CardStyle::Feature,
            cards,
        })
    }

    fn roles(&self) -> Result<CardGrid> {
        let cards = Role::ALL
            .iter()
            .map(|&role| {
                let accent = match role {
                    Role::Developer => Accent::Teal,
                    Role::Consultant => Accent::Coral,
                    Role::Architect => Accent::Violet,
                    Role::Qa => Accent::Amber,
                };
                self.text_card(
                    role.segment(),
                    Key::Role(role, TextField::Title),
                    Key::Role(role, TextField::Description),
                    accent,
                )
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(CardGrid {
            anchor: Some("roles"),
            eyebrow: None,
            title: None,
            intro: None,
            style: CardStyle::Feature,
            cards,
        })
    }

    fn team(&self) -> Result<TeamSection> {
        const ACCENTS: [Accent; 5] = [
            Accent::Teal,
            Accent::Coral,
            Accent::Violet,
            Accent::Mint,
            Accent::Amber,
        ];

        let members = self
            .config
            .team
            .iter()
            .enumerate()
            .map(|(i, member)| TeamCard {
                id: member.id.clone(),
                initial: member.initial(),
                name: member.name.clone(),
                role: member.role.get(self.locale).clone(),
                description: member.description.get(self.locale).clone(),
                accent: ACCENTS[i % ACCENTS.len()],
            })
            .collect();

        Ok(TeamSection {
            title: self.t(Key::Talent(TalentKey::TeamTitle))?,
            members,
        })
    }

    fn imprint(&self) -> Result<ImprintBlock> {
        let org = &self.config.organization;
        let mut entries = Vec::new();

        let mut company = vec![org.legal_name.clone()];
        if let Some(address) = &org.address {
            company.push(address.street.clone());
            company.push(format!("{} {}", address.postal_code, address.locality));
            company.push(if address.country == "DE" {
                self.t(Key::Imprint(ImprintKey::Country))?
            } else {
                address.country.clone()
            });
        }
        entries.push(ImprintEntry {
            heading: self.t(Key::Imprint(ImprintKey::Company))?,
            lines: company,
        });

        if let Some(director) = &org.managing_director {
            entries.push(ImprintEntry {
                heading: self.t(Key::Imprint(ImprintKey::Represented))?,
                lines: vec![format!(
                    "{}: {}",
                    self.t(Key::Imprint(ImprintKey::ManagingDirector))?,
                    director
                )],
            });
        }

        let mut contact = Vec::new();
        if let Some(phone) = &org.phone {
            contact.push(format!("{}: {}", self.t(Key::Imprint(ImprintKey::Phone))?, phone));
        }
        contact.push(format!(
            "{}: {}",
            self.t(Key::Imprint(ImprintKey::Email))?,
            org.email
        ));
        entries.push(ImprintEntry {
            heading: self.t(Key::Imprint(ImprintKey::Contact))?,
            lines: contact,
        });

        if let Some(register) = &org.register {
            entries.push(ImprintEntry {
                heading: self.t(Key::Imprint(ImprintKey::Registration))?,
                lines: vec![
                    format!(
                        "{}: {}",
                        self.t(Key::Imprint(ImprintKey::RegisterCourt))?,
                        register.court
                    ),
                    format!(
                        "{}: {}",
                        self.t(Key::Imprint(ImprintKey::RegisterNumber))?,
                        register.number
                    ),
                ],
            });
        }

        if let Some(vat_id) = &org.vat_id {
            entries.push(ImprintEntry {
                heading: self.t(Key::Imprint(ImprintKey::Vat))?,
                lines: vec![format!("{}: {}", self.t(Key::Imprint(ImprintKey::VatId))?, vat_id)],
            });
        }

        if let Some(director) = &org.managing_director {
            let mut lines = vec![director.clone()];
            if let Some(address) = &org.address {
                lines.push(address.street.clone());
                lines.push(format!("{} {}", address.postal_code, address.locality));
            }
            entries.push(ImprintEntry {
                heading: self.t(Key::Imprint(ImprintKey::Responsibility))?,
                lines,
            });
        }

        entries.push(ImprintEntry {
            heading: self.t(Key::Imprint(ImprintKey::Dispute))?,
            lines: vec![self.t(Key::Imprint(ImprintKey::DisputeText))?],
        });

        Ok(ImprintBlock {
            title: self.t(Key::Imprint(ImprintKey::Title))?,
            entries,
        })
    }

    fn text_card(&self, key: &'static str, title: Key, description: Key, accent: Accent) -> Result<Card> {
        Ok(Card {
            key,
            title: self.t(title)?,
            subtitle: None,
            description: self.t(description)?,
            items: Vec::new(),
            href: None,
            external: false,
            link_label: None,
            accent,
        })
    }
}

fn platform_accent(platform: Platform) -> Accent {
    match platform {
        Platform::Erp => Accent::Teal,
        Platform::Rental => Accent::Coral,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{site_with_messages, synthetic_site};

    fn card_keys(section: &Section) -> Vec<&'static str> {
        match section {
            Section::CardGrid(grid) => grid.cards.iter().map(|c| c.key).collect(),
            other => panic!("expected card grid, got {:?}", other),
        }
    }

    #[test]
    fn test_home_sections_in_declared_order() {
        let site = synthetic_site();
        let page = compose_page(&site, Page::Home, Locale::De).unwrap();
        assert_eq!(page.section_ids(), descriptor(Page::Home));
        assert_eq!(
            page.section_ids(),
            [
                SectionId::Hero,
                SectionId::BusinessAreas,
                SectionId::Values,
                SectionId::CallToAction
            ]
        );
    }

    #[test]
    fn test_every_page_follows_its_descriptor() {
        let site = synthetic_site();
        for route in Route::all() {
            let page = compose_page(&site, route.page, route.locale).unwrap();
            assert_eq!(page.route, route);
            assert_eq!(page.section_ids(), descriptor(route.page));
        }
    }

    #[test]
    fn test_feature_order_ignores_translation_content() {
        // Titles sort in reverse of the declared order; output must not follow them.
        let site = site_with_messages(|key, text| match key {
            Key::Feature(PlatformFeature::Booking, TextField::Title) => "zz booking".into(),
            Key::Feature(PlatformFeature::Reporting, TextField::Title) => "aa reporting".into(),
            _ => text,
        });
        let page = compose_page(&site, Page::Rental, Locale::En).unwrap();
        assert_eq!(
            card_keys(&page.sections[1].content),
            ["booking", "inventory", "billing", "reporting"]
        );
    }

    #[test]
    fn test_terms_sections_in_declared_order() {
        let site = synthetic_site();
        let page = compose_page(&site, Page::Terms, Locale::De).unwrap();
        match &page.sections[1].content {
            Section::Prose(blocks) => {
                let anchors: Vec<&str> = blocks.iter().map(|b| b.anchor).collect();
                let declared: Vec<&str> = TermsSection::ALL.iter().map(|s| s.segment()).collect();
                assert_eq!(anchors, declared);
                assert_eq!(blocks[0].heading, "de legal.terms.sections.scope.title");
            }
            other => panic!("expected prose, got {:?}", other),
        }
    }

    #[test]
    fn test_business_area_links_follow_locale() {
        let site = synthetic_site();
        let page = compose_page(&site, Page::Home, Locale::En).unwrap();
        match &page.sections[1].content {
            Section::CardGrid(grid) => {
                assert_eq!(grid.cards[0].href.as_deref(), Some("https://sparring.example.com"));
                assert!(grid.cards[0].external);
                assert_eq!(grid.cards[1].href.as_deref(), Some("/en/vermittlung"));
                assert_eq!(grid.cards[2].href.as_deref(), Some("/en/plattformen"));
                assert_eq!(grid.cards[2].items.len(), 2);
            }
            other => panic!("expected card grid, got {:?}", other),
        }
    }

    #[test]
    fn test_team_comes_from_config_in_locale() {
        let site = synthetic_site();
        let page = compose_page(&site, Page::Talent, Locale::De).unwrap();
        match &page.sections[2].content {
            Section::Team(team) => {
                assert_eq!(team.members.len(), 1);
                assert_eq!(team.members[0].role, "Architektin");
                assert_eq!(team.members[0].initial, "E");
            }
            other => panic!("expected team, got {:?}", other),
        }
    }

    #[test]
    fn test_imprint_omits_absent_fields() {
        let site = synthetic_site();
        let page = compose_page(&site, Page::Imprint, Locale::De).unwrap();
        match &page.sections[0].content {
            Section::Imprint(block) => {
                let headings: Vec<&str> = block.entries.iter().map(|e| e.heading.as_str()).collect();
                assert_eq!(
                    headings,
                    [
                        "de legal.imprint.company",
                        "de legal.imprint.contact",
                        "de legal.imprint.dispute"
                    ]
                );
                assert_eq!(block.entries[0].lines, ["Example Couture UG"]);
                assert_eq!(
                    block.entries[1].lines,
                    ["de legal.imprint.email: hello@example.com"]
                );
            }
            other => panic!("expected imprint, got {:?}", other),
        }
    }
}
