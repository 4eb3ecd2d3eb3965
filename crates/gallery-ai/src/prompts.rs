//! Fixed instruction prefixes for the gallery tools
//!
//! Each tool sends a constant instruction followed by whatever the
//! pipeline extracted. Keeping the wording here, next to the clients
//! that send it, makes the outbound contract reviewable in one place.

/// Legal risk analysis instruction; the contract text is appended.
pub const RISK_ANALYSIS_PREFIX: &str = "You are a legal expert. Read the following contract and \
list all potential risks, liabilities, or unfavorable terms for the party receiving the \
contract. Present the risks as a numbered list with a brief explanation for each.\n\n\
Contract Text:\n";

/// Handwritten-prescription transcription instruction, sent together
/// with the prescription image.
pub const PRESCRIPTION_PROMPT: &str = "\
You are an expert medical transcriptionist specializing in deciphering and accurately \
transcribing handwritten medical prescriptions.

Extract and return the following details from the provided prescription:
1. Patient's full name
2. Patient's age (handle different formats like \"42y\", \"42yrs\", \"42\", \"42 years\")
3. Patient's gender
4. Doctor's full name
5. Doctor's license number
6. Prescription date (in YYYY-MM-DD format)
7. List of medications including:
   - Medication name
   - Dosage
   - Frequency
   - Duration
8. Additional notes or instructions (as bullet points, clearly structured)

Return the response as structured JSON with matching keys.";

/// Disclaimer rendered under every diagnosis response.
pub const DIAGNOSIS_DISCLAIMER: &str = "Disclaimer: This is an AI-powered tool for \
informational purposes only and should not be considered a substitute for professional \
medical advice. Always consult with a qualified healthcare provider for any health concerns.";

/// Build the risk-analysis prompt for a contract's extracted text.
#[must_use = "returns the assembled prompt"]
pub fn risk_analysis_prompt(contract_text: &str) -> String {
    format!("{RISK_ANALYSIS_PREFIX}{contract_text}")
}

/// Build the multi-modal diagnosis prompt.
///
/// Mentions the attached image when one is provided so the model relates
/// the symptoms to it.
#[must_use = "returns the assembled prompt"]
pub fn diagnosis_prompt(symptoms: &str, has_image: bool) -> String {
    let mut prompt = format!("Based on the following symptoms and medical history: {symptoms}. ");
    if has_image {
        prompt.push_str("Analyze the following medical image.");
    }
    prompt.push_str(" Provide a potential diagnosis and recommendations.");
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_prompt_appends_contract() {
        let prompt = risk_analysis_prompt("Clause 1: everything is our fault.");
        assert!(prompt.starts_with("You are a legal expert."));
        assert!(prompt.ends_with("Clause 1: everything is our fault."));
        assert!(prompt.contains("Contract Text:\n"));
    }

    #[test]
    fn test_diagnosis_prompt_without_image() {
        let prompt = diagnosis_prompt("persistent cough", false);
        assert!(prompt.contains("persistent cough"));
        assert!(!prompt.contains("medical image"));
        assert!(prompt.ends_with("Provide a potential diagnosis and recommendations."));
    }

    #[test]
    fn test_diagnosis_prompt_with_image() {
        let prompt = diagnosis_prompt("rash on forearm", true);
        assert!(prompt.contains("Analyze the following medical image."));
    }

    #[test]
    fn test_prescription_prompt_requests_json() {
        assert!(PRESCRIPTION_PROMPT.contains("structured JSON"));
        assert!(PRESCRIPTION_PROMPT.contains("YYYY-MM-DD"));
    }
}
