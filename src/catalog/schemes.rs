use crate::i18n::Localized;
use crate::models::GovernmentScheme;

pub static SCHEMES: &[GovernmentScheme] = &[
    GovernmentScheme {
        name: Localized::new("PM-KISAN", "पीएम-किसान"),
        benefit: Localized::new(
            "Rs 6,000 per year paid in three instalments",
            "तीन किस्तों में प्रति वर्ष 6,000 रुपये",
        ),
        eligibility: Localized::new(
            "All landholding farmer families",
            "सभी भूमिधारक किसान परिवार",
        ),
    },
    GovernmentScheme {
        name: Localized::new(
            "Pradhan Mantri Fasal Bima Yojana",
            "प्रधानमंत्री फसल बीमा योजना",
        ),
        benefit: Localized::new(
            "Crop insurance against natural calamities at 2% (Kharif) / 1.5% (Rabi) premium",
            "प्राकृतिक आपदाओं से फसल बीमा, 2% (खरीफ) / 1.5% (रबी) प्रीमियम पर",
        ),
        eligibility: Localized::new(
            "Farmers growing notified crops in notified areas",
            "अधिसूचित क्षेत्रों में अधिसूचित फसलें उगाने वाले किसान",
        ),
    },
    GovernmentScheme {
        name: Localized::new("Kisan Credit Card", "किसान क्रेडिट कार्ड"),
        benefit: Localized::new(
            "Short-term crop loans up to Rs 3 lakh at concessional interest",
            "रियायती ब्याज पर 3 लाख रुपये तक का अल्पकालिक फसल ऋण",
        ),
        eligibility: Localized::new(
            "Owner cultivators, tenant farmers and self-help groups",
            "स्वयं खेती करने वाले, बटाईदार किसान और स्वयं सहायता समूह",
        ),
    },
    GovernmentScheme {
        name: Localized::new("Soil Health Card", "मृदा स्वास्थ्य कार्ड"),
        benefit: Localized::new(
            "Free soil testing with nutrient and fertilizer advice every two years",
            "हर दो साल में मुफ्त मिट्टी जांच और खाद की सलाह",
        ),
        eligibility: Localized::new("All farmers", "सभी किसान"),
    },
    GovernmentScheme {
        name: Localized::new(
            "PM Krishi Sinchai Yojana",
            "प्रधानमंत्री कृषि सिंचाई योजना",
        ),
        benefit: Localized::new(
            "Subsidy on drip and sprinkler irrigation (Per Drop More Crop)",
            "ड्रिप और स्प्रिंकलर सिंचाई पर सब्सिडी (प्रति बूंद अधिक फसल)",
        ),
        eligibility: Localized::new(
            "Farmers with cultivable land and a water source",
            "खेती योग्य भूमि और जल स्रोत वाले किसान",
        ),
    },
    GovernmentScheme {
        name: Localized::new("e-NAM", "ई-नाम"),
        benefit: Localized::new(
            "Online mandi trading for better crop prices",
            "बेहतर फसल दाम के लिए ऑनलाइन मंडी व्यापार",
        ),
        eligibility: Localized::new(
            "Farmers registered with a linked APMC mandi",
            "जुड़ी हुई एपीएमसी मंडी में पंजीकृत किसान",
        ),
    },
];
