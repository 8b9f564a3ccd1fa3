//! Hand-curated table of well-known legitimate employers.

pub struct LedgerEntry {
    /// Lower-case token matched as a substring of the queried name.
    pub key: &'static str,
    pub full_name: &'static str,
    pub rating: f32,
    pub employees: &'static str,
    pub industry: &'static str,
    pub headquarters: &'static str,
    pub history: &'static str,
    pub issues: &'static [&'static str],
    pub website: &'static str,
    pub linkedin: &'static str,
    pub glassdoor: &'static str,
    pub competitors: &'static [&'static str],
}

pub const LEDGER: &[LedgerEntry] = &[
    LedgerEntry {
        key: "google",
        full_name: "Google LLC (Alphabet Inc.)",
        rating: 4.5,
        employees: "190,000+",
        industry: "Technology & Internet Services",
        headquarters: "1600 Amphitheatre Parkway, Mountain View, California, USA",
        history: "Founded on September 4, 1998. It began as a research project by Larry Page and Sergey Brin at Stanford University and effectively changed the way the world finds information.",
        issues: &["Antitrust lawsuits in EU and US", "Privacy concerns over data collection"],
        website: "https://www.google.com",
        linkedin: "https://www.linkedin.com/company/google",
        glassdoor: "https://www.glassdoor.com/Overview/Working-at-Google-EI_IE9079.11,17.htm",
        competitors: &["Microsoft", "Amazon", "Apple", "Meta"],
    },
    LedgerEntry {
        key: "microsoft",
        full_name: "Microsoft Corporation",
        rating: 4.4,
        employees: "221,000+",
        industry: "Software & Cloud Computing",
        headquarters: "One Microsoft Way, Redmond, Washington, USA",
        history: "Founded on April 4, 1975, by Bill Gates and Paul Allen. They revolutionized personal computing with the Windows operating system and Office suite.",
        issues: &["Historical antitrust cases", "Cybersecurity vulnerabilities in Exchange"],
        website: "https://www.microsoft.com",
        linkedin: "https://www.linkedin.com/company/microsoft",
        glassdoor: "https://www.glassdoor.com/Overview/Working-at-Microsoft-EI_IE1651.11,20.htm",
        competitors: &["Google", "Apple", "Amazon", "IBM"],
    },
    LedgerEntry {
        key: "apple",
        full_name: "Apple Inc.",
        rating: 4.3,
        employees: "164,000+",
        industry: "Consumer Electronics & Software",
        headquarters: "One Apple Park Way, Cupertino, California, USA",
        history: "Founded on April 1, 1976, by Steve Jobs, Steve Wozniak, and Ronald Wayne. Known for creating the iPhone, iPad, and Mac, defining modern consumer electronics.",
        issues: &["App Store commission controversies", "Supply chain labor concerns"],
        website: "https://www.apple.com",
        linkedin: "https://www.linkedin.com/company/apple",
        glassdoor: "https://www.glassdoor.com/Overview/Working-at-Apple-EI_IE1138.11,16.htm",
        competitors: &["Samsung", "Google", "Microsoft", "Dell"],
    },
    LedgerEntry {
        key: "amazon",
        full_name: "Amazon.com, Inc.",
        rating: 3.8,
        employees: "1,540,000+",
        industry: "E-commerce & Cloud Computing",
        headquarters: "410 Terry Avenue North, Seattle, Washington, USA",
        history: "Founded on July 5, 1994, by Jeff Bezos. What started as an online bookstore in a garage became the world's largest e-commerce and cloud computing platform.",
        issues: &["Warehouse working conditions", "Market dominance concerns"],
        website: "https://www.amazon.com",
        linkedin: "https://www.linkedin.com/company/amazon",
        glassdoor: "https://www.glassdoor.com/Overview/Working-at-Amazon-EI_IE6036.11,17.htm",
        competitors: &["Walmart", "Alibaba", "Microsoft", "Google"],
    },
    LedgerEntry {
        key: "meta",
        full_name: "Meta Platforms, Inc.",
        rating: 3.6,
        employees: "66,000+",
        industry: "Social Media & Technology",
        headquarters: "1 Meta Way, Menlo Park, California, USA",
        history: "Founded on February 4, 2004, as Facebook by Mark Zuckerberg. It pioneered modern social networking and now focuses on connecting people through the metaverse.",
        issues: &["Cambridge Analytica scandal", "Content moderation challenges"],
        website: "https://about.meta.com",
        linkedin: "https://www.linkedin.com/company/meta",
        glassdoor: "https://www.glassdoor.com/Overview/Working-at-Meta-EI_IE40772.11,15.htm",
        competitors: &["Google", "Snap", "TikTok", "Microsoft"],
    },
    LedgerEntry {
        key: "nvidia",
        full_name: "NVIDIA Corporation",
        rating: 4.7,
        employees: "27,000+",
        industry: "Semiconductors & AI Hardware",
        headquarters: "2788 San Tomas Expressway, Santa Clara, California, USA",
        history: "Founded on April 5, 1993. NVIDIA invented the GPU in 1999, sparking the growth of the PC gaming market and redefining modern computer graphics and AI.",
        issues: &["Crypto mining demand volatility", "Geopolitical export restrictions"],
        website: "https://www.nvidia.com",
        linkedin: "https://www.linkedin.com/company/nvidia",
        glassdoor: "https://www.glassdoor.com/Overview/Working-at-NVIDIA-EI_IE7633.11,17.htm",
        competitors: &["AMD", "Intel", "Qualcomm", "TSMC"],
    },
];

/// First entry, in table order, whose key occurs in the lower-cased name.
pub fn lookup(lower_name: &str) -> Option<&'static LedgerEntry> {
    LEDGER.iter().find(|entry| lower_name.contains(entry.key))
}
