//! Static icon catalog: which logos float in the cloud.

use url::Url;

/// One catalog entry. The image URL is derived from the CDN base at fetch
/// time; `slug` is the path segment the CDN keys logos by.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IconDescriptor {
    pub id: &'static str,
    pub label: &'static str,
    pub slug: &'static str,
}

impl IconDescriptor {
    /// Full image URL under the given CDN base.
    pub fn image_url(&self, base: &Url) -> String {
        format!(
            "{}/{slug}/{slug}.png",
            base.as_str().trim_end_matches('/'),
            slug = self.slug
        )
    }
}

pub const CATALOG: &[IconDescriptor] = &[
    IconDescriptor { id: "html5", label: "HTML5", slug: "html" },
    IconDescriptor { id: "css3", label: "CSS3", slug: "css" },
    IconDescriptor { id: "javascript", label: "JavaScript", slug: "javascript" },
    IconDescriptor { id: "php", label: "PHP", slug: "php" },
    IconDescriptor { id: "mysql", label: "MySQL", slug: "mysql" },
    IconDescriptor { id: "kotlin", label: "Kotlin", slug: "kotlin" },
    IconDescriptor { id: "java", label: "Java", slug: "java" },
    IconDescriptor { id: "wordpress", label: "WordPress", slug: "wordpress" },
    IconDescriptor { id: "python", label: "Python", slug: "python" },
    IconDescriptor { id: "linux", label: "Linux", slug: "linux" },
    IconDescriptor { id: "aws", label: "AWS", slug: "aws" },
    IconDescriptor { id: "react", label: "React", slug: "react" },
    IconDescriptor { id: "flutter", label: "Flutter", slug: "flutter" },
    IconDescriptor { id: "laravel", label: "Laravel", slug: "laravel" },
];
