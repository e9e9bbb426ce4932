//! Per-route search metadata.
//!
//! Every public path is declared once in [`ROUTES`] with the page it renders
//! and its head metadata. [`HeadTags`] turns an entry into the complete set of
//! head tags for one response, so nothing from a previous page can leak into
//! the next.
//!
//! # Example
//!
//! ```rust,ignore
//! let table = RouteTable::new(config.features.landing_pages);
//! let entry = table.lookup("/global-mnc-placements").unwrap();
//! let head = HeadTags::for_route(entry, &config.base_url, config.features.seo);
//! ```

mod head;
pub mod schema;
pub mod sitemap;

pub use head::HeadTags;

/// Which top-level page a path renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    /// The single-page marketing site.
    Marketing,
    /// Login/register, then the student or admin dashboard.
    GetStarted,
}

/// schema.org type of a route's structured data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaType {
    WebPage,
    Course,
    JobPosting,
    EducationalOccupationalCredential,
}

impl SchemaType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::WebPage => "WebPage",
            Self::Course => "Course",
            Self::JobPosting => "JobPosting",
            Self::EducationalOccupationalCredential => "EducationalOccupationalCredential",
        }
    }

    /// Property holding the display name. Job postings use `title`.
    #[must_use]
    pub const fn name_property(self) -> &'static str {
        match self {
            Self::JobPosting => "title",
            _ => "name",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct StructuredData {
    pub kind: SchemaType,
    pub name: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct RouteMeta {
    pub title: &'static str,
    pub description: &'static str,
    pub keywords: &'static str,
    pub structured: StructuredData,
}

#[derive(Debug, Clone, Copy)]
pub struct RouteEntry {
    pub path: &'static str,
    pub page: Page,
    /// Keyword landing path, served only when landing pages are enabled.
    pub landing: bool,
    pub meta: RouteMeta,
}

impl RouteEntry {
    /// Canonical path; every route is its own canonical.
    #[must_use]
    pub const fn canonical(&self) -> &'static str {
        self.path
    }
}

pub const ROUTES: &[RouteEntry] = &[
    RouteEntry {
        path: "/",
        page: Page::Marketing,
        landing: false,
        meta: RouteMeta {
            title: "Sankalp Training Program 2.0 | Global MNC Placements | Google Amazon Microsoft Jobs",
            description: "Join Sankalp Training Program 2.0 by SpectoV. Global professional training with guaranteed placements in Google, Amazon, Microsoft and top MNCs worldwide. 500+ success stories.",
            keywords: "sankalp training program, sankalp spectov, spectov internship, sankalp internship, global mnc placements, google jobs, amazon careers, microsoft placements",
            structured: StructuredData {
                kind: SchemaType::WebPage,
                name: "Sankalp Training Program 2.0 - Home",
                description: "Global professional training program with MNC placements",
            },
        },
    },
    RouteEntry {
        path: "/getstarted",
        page: Page::GetStarted,
        landing: false,
        meta: RouteMeta {
            title: "Apply Now | Sankalp Training Program 2.0 | Global MNC Placement Application",
            description: "Start your journey with Sankalp Training Program 2.0. Apply for global MNC placements in Google, Amazon, Microsoft. Secure your future with guaranteed job placement.",
            keywords: "sankalp training application, spectov internship application, get started sankalp, join sankalp program, mnc job application, global placement program",
            structured: StructuredData {
                kind: SchemaType::WebPage,
                name: "Apply for Sankalp Training Program",
                description: "Application page for global MNC placement program",
            },
        },
    },
    RouteEntry {
        path: "/sankalp-training-program",
        page: Page::Marketing,
        landing: true,
        meta: RouteMeta {
            title: "Sankalp Training Program | Professional Development | Global Career Transformation",
            description: "Comprehensive Sankalp training program offering professional development, technical skills, and guaranteed global career advancement with top MNC placements.",
            keywords: "sankalp training program, professional training, career development, spectov training, global skill development, mnc preparation program",
            structured: StructuredData {
                kind: SchemaType::Course,
                name: "Sankalp Professional Training Program",
                description: "6-month comprehensive professional development program",
            },
        },
    },
    RouteEntry {
        path: "/spectov-internship",
        page: Page::GetStarted,
        landing: true,
        meta: RouteMeta {
            title: "SpectoV Internship Program | Global Internship Opportunities | Sankalp Training",
            description: "Apply for SpectoV internship through Sankalp program. Gain practical experience with global companies and secure guaranteed job placements in top MNCs.",
            keywords: "spectov internship, sankalp internship, global internship opportunities, professional internship, mnc internship program, international work experience",
            structured: StructuredData {
                kind: SchemaType::WebPage,
                name: "SpectoV Global Internship Program",
                description: "International internship opportunities with MNC placements",
            },
        },
    },
    RouteEntry {
        path: "/sankalp-job-opportunities",
        page: Page::GetStarted,
        landing: true,
        meta: RouteMeta {
            title: "Sankalp Job Opportunities | Global MNC Careers | Google Amazon Microsoft Jobs",
            description: "Explore sankalp job opportunities and global career placements. Get hired in Google, Amazon, Microsoft through our comprehensive training and placement program.",
            keywords: "sankalp job opportunities, global career placement, mnc job openings, spectov careers, google jobs, amazon careers, microsoft jobs, international job placement",
            structured: StructuredData {
                kind: SchemaType::JobPosting,
                name: "Global MNC Job Opportunities",
                description: "Career opportunities in top multinational companies",
            },
        },
    },
    RouteEntry {
        path: "/global-mnc-placements",
        page: Page::GetStarted,
        landing: true,
        meta: RouteMeta {
            title: "Global MNC Placements | Google Amazon Microsoft Careers | Sankalp Success Stories",
            description: "500+ successful global MNC placements through Sankalp Training Program 2.0. Join professionals working in Google, Amazon, Microsoft, Meta, Apple worldwide.",
            keywords: "global mnc placements, google placements, amazon jobs, microsoft careers, meta jobs, apple careers, international job placement, global career opportunities",
            structured: StructuredData {
                kind: SchemaType::WebPage,
                name: "Global MNC Placement Success Stories",
                description: "Success stories of global MNC placements",
            },
        },
    },
    RouteEntry {
        path: "/international-training-program",
        page: Page::Marketing,
        landing: true,
        meta: RouteMeta {
            title: "International Training Program | Global Professional Development | Worldwide Job Placement",
            description: "Join our international training program with global reach. Professional development for worldwide job opportunities in top multinational corporations.",
            keywords: "international training program, global professional development, worldwide job placement, international career program, global skill training, multinational career opportunities",
            structured: StructuredData {
                kind: SchemaType::Course,
                name: "International Professional Training Program",
                description: "Global training program for international career opportunities",
            },
        },
    },
    RouteEntry {
        path: "/professional-certification-program",
        page: Page::GetStarted,
        landing: true,
        meta: RouteMeta {
            title: "Professional Certification Program | Industry-Recognized Credentials | Global Career Boost",
            description: "Earn industry-recognized professional certifications through Sankalp Training Program 2.0. Boost your global career with credentials valued by top MNCs.",
            keywords: "professional certification program, industry certification, global career credentials, professional development certification, mnc recognized certification, career advancement program",
            structured: StructuredData {
                kind: SchemaType::EducationalOccupationalCredential,
                name: "Global Professional Certification",
                description: "Industry-recognized professional certification program",
            },
        },
    },
    RouteEntry {
        path: "/career-transformation-program",
        page: Page::Marketing,
        landing: true,
        meta: RouteMeta {
            title: "Career Transformation Program | Professional Growth | Global Opportunities",
            description: "Transform your career with Sankalp's comprehensive program. From skill development to global MNC placements - your complete career transformation journey.",
            keywords: "career transformation program, professional growth, career change program, skill development, global career opportunities, professional transition, career advancement",
            structured: StructuredData {
                kind: SchemaType::WebPage,
                name: "Career Transformation Program",
                description: "Comprehensive career transformation and professional growth program",
            },
        },
    },
    RouteEntry {
        path: "/global-placement-guarantee",
        page: Page::GetStarted,
        landing: true,
        meta: RouteMeta {
            title: "Global Placement Guarantee | 100% Job Placement Assurance | MNC Career Security",
            description: "100% placement guarantee with Sankalp Training Program 2.0. Secure your future with guaranteed job placement in top global MNCs including Google, Amazon, Microsoft.",
            keywords: "global placement guarantee, 100% job placement, placement assurance, mnc job guarantee, career security, guaranteed employment, job placement program",
            structured: StructuredData {
                kind: SchemaType::WebPage,
                name: "Global Placement Guarantee Program",
                description: "100% job placement guarantee in global MNCs",
            },
        },
    },
];

/// The routes served by this deployment.
#[derive(Debug, Clone)]
pub struct RouteTable {
    entries: Vec<&'static RouteEntry>,
}

impl RouteTable {
    /// Build the table, leaving out the landing paths when they are disabled.
    #[must_use]
    pub fn new(landing_pages: bool) -> Self {
        Self {
            entries: ROUTES
                .iter()
                .filter(|entry| landing_pages || !entry.landing)
                .collect(),
        }
    }

    /// Exact-match lookup. A single trailing slash is ignored.
    #[must_use]
    pub fn lookup(&self, path: &str) -> Option<&'static RouteEntry> {
        let path = match path.strip_suffix('/') {
            Some(stripped) if !stripped.is_empty() => stripped,
            _ => path,
        };
        self.entries.iter().copied().find(|entry| entry.path == path)
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static RouteEntry> + '_ {
        self.entries.iter().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
