//! JSON-LD structured data.

use serde_json::{Map, Value, json};

use super::RouteEntry;
use crate::content::Faq;

pub const SITE_NAME: &str = "Sankalp SpectoV Global Training";
pub const PROVIDER_NAME: &str = "SpectoV Global Training Solutions";
pub const PROVIDER_URL: &str = "https://spectov.in";

/// Display names for known path segments.
const SEGMENT_NAMES: &[(&str, &str)] = &[
    ("sankalp-training-program", "Sankalp Training Program"),
    ("spectov-internship", "Global Internship Program"),
    ("sankalp-job-opportunities", "Global Job Opportunities"),
    ("global-mnc-placements", "Global MNC Placements"),
    ("international-training-program", "International Training"),
    ("professional-certification-program", "Professional Certification"),
    ("career-transformation-program", "Career Transformation"),
    ("global-placement-guarantee", "Placement Guarantee"),
    ("getstarted", "Apply Now"),
];

/// Route schema, enriched with site, provider, language and audience.
#[must_use]
pub fn route_schema(entry: &RouteEntry, base_url: &str) -> Value {
    let data = entry.meta.structured;
    let mut object = Map::new();
    object.insert("@context".into(), json!("https://schema.org"));
    object.insert("@type".into(), json!(data.kind.as_str()));
    object.insert(data.kind.name_property().into(), json!(data.name));
    object.insert("description".into(), json!(data.description));
    object.insert("url".into(), json!(format!("{base_url}{}", entry.canonical())));
    object.insert(
        "isPartOf".into(),
        json!({ "@type": "WebSite", "name": SITE_NAME, "url": base_url }),
    );
    object.insert(
        "provider".into(),
        json!({ "@type": "Organization", "name": PROVIDER_NAME, "url": PROVIDER_URL }),
    );
    object.insert("inLanguage".into(), json!("en-IN"));
    object.insert(
        "audience".into(),
        json!({ "@type": "Audience", "audienceType": "Global Professionals" }),
    );
    Value::Object(object)
}

/// Breadcrumb trail for `path`, starting at the site root.
#[must_use]
pub fn breadcrumbs(path: &str, base_url: &str) -> Value {
    let mut items = vec![json!({
        "@type": "ListItem",
        "position": 1,
        "name": "Global Training Home",
        "item": format!("{base_url}/"),
    })];

    let mut current = String::new();
    for (index, segment) in path.split('/').filter(|s| !s.is_empty()).enumerate() {
        current.push('/');
        current.push_str(segment);
        items.push(json!({
            "@type": "ListItem",
            "position": index + 2,
            "name": segment_name(segment),
            "item": format!("{base_url}{current}"),
        }));
    }

    json!({
        "@context": "https://schema.org",
        "@type": "BreadcrumbList",
        "itemListElement": items,
    })
}

/// Known display name, or the segment title-cased with hyphens as spaces.
#[must_use]
pub fn segment_name(segment: &str) -> String {
    if let Some((_, name)) = SEGMENT_NAMES.iter().find(|(key, _)| *key == segment) {
        return (*name).to_string();
    }

    segment
        .split('-')
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars).collect()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// The provider organization and its course catalog.
#[must_use]
pub fn provider_organization(base_url: &str) -> Value {
    json!({
        "@context": "https://schema.org",
        "@type": "Organization",
        "name": PROVIDER_NAME,
        "url": PROVIDER_URL,
        "areaServed": {
            "@type": "Country",
            "name": ["India", "United States", "United Kingdom", "Canada", "Australia"],
        },
        "hasOfferCatalog": {
            "@type": "OfferCatalog",
            "name": "Global Training Programs",
            "itemListElement": [{
                "@type": "Offer",
                "itemOffered": {
                    "@type": "Course",
                    "name": "Sankalp Training Program 2.0",
                    "url": base_url,
                    "provider": { "@type": "Organization", "name": PROVIDER_NAME },
                    "courseMode": ["online", "blended"],
                    "educationalLevel": "Professional",
                    "occupationalCategory": "Technology and Business",
                },
            }],
        },
    })
}

/// The training network as an educational organization.
#[must_use]
pub fn training_network(base_url: &str) -> Value {
    json!({
        "@context": "https://schema.org",
        "@type": "EducationalOrganization",
        "name": "Sankalp Global Training Network",
        "url": base_url,
        "parentOrganization": {
            "@type": "Organization",
            "name": "SpectoV International",
            "url": PROVIDER_URL,
        },
        "hasCredential": {
            "@type": "EducationalOccupationalCredential",
            "name": "Global Professional Certification",
            "recognizedBy": [
                { "@type": "Organization", "name": "Google" },
                { "@type": "Organization", "name": "Amazon" },
                { "@type": "Organization", "name": "Microsoft" },
            ],
        },
    })
}

/// `FAQPage` built from the FAQ section.
#[must_use]
pub fn faq_page(faqs: &[Faq]) -> Value {
    let questions: Vec<Value> = faqs
        .iter()
        .map(|faq| {
            json!({
                "@type": "Question",
                "name": faq.question,
                "acceptedAnswer": { "@type": "Answer", "text": faq.answer },
            })
        })
        .collect();

    json!({
        "@context": "https://schema.org",
        "@type": "FAQPage",
        "mainEntity": questions,
    })
}

/// Serialize for embedding in a `<script type="application/ld+json">` block.
///
/// `</` is escaped so the payload cannot close the script element.
#[must_use]
pub fn to_script_json(value: &Value) -> String {
    value.to_string().replace("</", "<\\/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::SITE;
    use crate::seo::RouteTable;

    const BASE: &str = "https://sankalp.spectov.in";

    #[test]
    fn test_job_posting_uses_title() {
        let table = RouteTable::new(true);
        let entry = table.lookup("/sankalp-job-opportunities").unwrap_or_else(|| unreachable!());
        let schema = route_schema(entry, BASE);
        assert_eq!(schema["@type"], "JobPosting");
        assert_eq!(schema["title"], "Global MNC Job Opportunities");
        assert!(schema.get("name").is_none());
        assert_eq!(schema["url"], "https://sankalp.spectov.in/sankalp-job-opportunities");
        assert_eq!(schema["inLanguage"], "en-IN");
        assert_eq!(schema["audience"]["audienceType"], "Global Professionals");
    }

    #[test]
    fn test_breadcrumbs_for_root_and_landing_path() {
        let root = breadcrumbs("/", BASE);
        assert_eq!(root["itemListElement"].as_array().map(Vec::len), Some(1));

        let crumbs = breadcrumbs("/spectov-internship", BASE);
        let second = &crumbs["itemListElement"][1];
        assert_eq!(second["position"], 2);
        assert_eq!(second["name"], "Global Internship Program");
        assert_eq!(second["item"], "https://sankalp.spectov.in/spectov-internship");
    }

    #[test]
    fn test_unknown_segments_are_title_cased() {
        assert_eq!(segment_name("summer-bootcamp-2025"), "Summer Bootcamp 2025");
        assert_eq!(segment_name("getstarted"), "Apply Now");
    }

    #[test]
    fn test_faq_page_and_script_escaping() {
        let faq = faq_page(SITE.faqs);
        assert_eq!(faq["mainEntity"].as_array().map(Vec::len), Some(5));
        assert_eq!(
            to_script_json(&json!({ "a": "</script>" })),
            r#"{"a":"<\/script>"}"#
        );
    }
}
