use crate::models::MatchingDomain;

const DEVELOPER_CATEGORIES: &[&str] = &[
    "Frontend Developer",
    "Backend Developer",
    "Full Stack Developer",
    "Mobile Developer",
    "DevOps Engineer",
    "Data Engineer",
    "Machine Learning Engineer",
    "UI/UX Developer",
    "Game Developer",
    "Blockchain Developer",
    "Cloud Engineer",
    "Security Engineer",
];

const DOCTOR_CATEGORIES: &[&str] = &[
    "Cardiologist",
    "Neurologist",
    "Pediatrician",
    "Dermatologist",
    "Orthopedic Surgeon",
    "Emergency Medicine",
    "Psychiatrist",
    "Radiologist",
    "Anesthesiologist",
    "Oncologist",
    "Gynecologist",
    "General Practitioner",
];

const FOUNDER_CATEGORIES: &[&str] = &[
    "Tech Startup",
    "FinTech",
    "HealthTech",
    "EdTech",
    "E-commerce",
    "SaaS",
    "AI/ML Startup",
    "Blockchain",
    "Green Tech",
    "Food Tech",
    "Social Impact",
    "B2B Services",
];

/// Fixed profession categories valid for a matching domain
pub fn taxonomy(domain: MatchingDomain) -> &'static [&'static str] {
    match domain {
        MatchingDomain::Developer => DEVELOPER_CATEGORIES,
        MatchingDomain::Doctor => DOCTOR_CATEGORIES,
        MatchingDomain::Founder => FOUNDER_CATEGORIES,
    }
}

#[inline]
pub fn is_known_category(domain: MatchingDomain, category: &str) -> bool {
    taxonomy(domain).contains(&category)
}
