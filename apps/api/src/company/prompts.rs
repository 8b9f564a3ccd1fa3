// Prompt constants for the company lookup.

pub const COMPANY_INVESTIGATOR: &str = "You are a professional corporate fraud investigator.";

/// Replace `{company_name}` before sending.
pub const COMPANY_LOOKUP_TEMPLATE: &str = r#"Analyze company: {company_name}. Return JSON:
{
  "full_name": "Official Legal Name",
  "industry": "Industry Type",
  "headquarters": "Full Street Address, City, State, Country",
  "location_verified": true/false,
  "website": "URL",
  "linkedin": "URL",
  "glassdoor": "URL",
  "rating": 0.0-5.0,
  "employees": "Count",
  "history": "Long description",
  "past_issues": ["Issue1", "Issue2"],
  "competitors": ["Comp1", "Comp2"],
  "growth_stats": [int, int, int, int, int, int],
  "is_scam": true/false
}

Verify the location: is the headquarters real (true) or just a PO Box/virtual office (false)?
If the company is unknown but looks like a generic business, do NOT mark it as a scam unless it shows fraud patterns."#;
