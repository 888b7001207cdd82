//! Compiled-in response catalog.
//!
//! Categories are declared in match priority order: pension, ration card,
//! health scheme, land records, scholarship, complaint.

use crate::catalog::{Localized, ResponseCatalog, ServiceCategory};

fn list(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn text(english: &str, hindi: &str, telugu: &str, tamil: &str, kannada: &str) -> Localized<String> {
    Localized::new(
        english.to_string(),
        hindi.to_string(),
        telugu.to_string(),
        tamil.to_string(),
        kannada.to_string(),
    )
}

fn lists(
    english: &[&str],
    hindi: &[&str],
    telugu: &[&str],
    tamil: &[&str],
    kannada: &[&str],
) -> Localized<Vec<String>> {
    Localized::new(
        list(english),
        list(hindi),
        list(telugu),
        list(tamil),
        list(kannada),
    )
}

impl ResponseCatalog {
    /// The built-in catalog covering all supported languages.
    pub fn builtin() -> Self {
        ResponseCatalog {
            domain_vocabulary: domain_vocabulary(),
            out_of_domain: text(
                "Your information is not relevant, please provide government service only.",
                "आपकी जानकारी प्रासंगिक नहीं है, कृपया केवल सरकारी सेवा प्रदान करें।",
                "మీ సమాచారం సంబంధితం కాదు, దయచేసి ప్రభుత్వ సేవను మాత్రమే అందించండి.",
                "உங்கள் தகவல் பொருத்தமானது அல்ல, தயவுசெய்து அரசு சேவையை மட்டும் வழங்கவும்.",
                "ನಿಮ್ಮ ಮಾಹಿತಿ ಸಂಬಂಧಿತವಾಗಿಲ್ಲ, ದಯವಿಟ್ಟು ಸರ್ಕಾರಿ ಸೇವೆಯನ್ನು ಮಾತ್ರ ಒದಗಿಸಿ.",
            ),
            generic: lists(
                &[
                    "Hey! I'm GramaBot. How can I help you with government services today?",
                    "I can help with pension, ration card, health scheme, land records, scholarship and complaint services. Which one do you need?",
                    "Thank you for your query. Please tell me which government service you need, for example pension status or a ration card application.",
                ],
                &[
                    "मैं पेंशन, राशन कार्ड, स्वास्थ्य योजना, भूमि रिकॉर्ड, छात्रवृत्ति और शिकायत सेवाओं में मदद कर सकता हूं। आपको कौन सी सेवा चाहिए?",
                    "कृपया बताएं कि आपको किस सरकारी सेवा के बारे में जानकारी चाहिए।",
                ],
                &[
                    "నేను పెన్షన్, రేషన్ కార్డ్, ఆరోగ్య పథకం, భూమి రికార్డులు, స్కాలర్‌షిప్ మరియు ఫిర్యాదు సేవలలో సహాయం చేయగలను. మీకు ఏ సేవ కావాలి?",
                    "దయచేసి మీకు ఏ ప్రభుత్వ సేవ గురించి సమాచారం కావాలో చెప్పండి.",
                ],
                &[
                    "ஓய்வூதியம், ரேஷன் கார்டு, சுகாதார திட்டம், நில பதிவுகள், உதவித்தொகை மற்றும் புகார் சேவைகளில் நான் உதவ முடியும். உங்களுக்கு எந்த சேவை தேவை?",
                    "உங்களுக்கு எந்த அரசு சேவை பற்றிய தகவல் தேவை என்று தயவுசெய்து சொல்லுங்கள்.",
                ],
                &[
                    "ಪಿಂಚಣಿ, ರೇಷನ್ ಕಾರ್ಡ್, ಆರೋಗ್ಯ ಯೋಜನೆ, ಭೂಮಿ ದಾಖಲೆಗಳು, ವಿದ್ಯಾರ್ಥಿವೇತನ ಮತ್ತು ದೂರು ಸೇವೆಗಳಲ್ಲಿ ನಾನು ಸಹಾಯ ಮಾಡಬಹುದು. ನಿಮಗೆ ಯಾವ ಸೇವೆ ಬೇಕು?",
                    "ದಯವಿಟ್ಟು ನಿಮಗೆ ಯಾವ ಸರ್ಕಾರಿ ಸೇವೆಯ ಬಗ್ಗೆ ಮಾಹಿತಿ ಬೇಕು ಎಂದು ತಿಳಿಸಿ.",
                ],
            ),
            categories: vec![
                pension(),
                ration_card(),
                health_scheme(),
                land_records(),
                scholarship(),
                complaint(),
            ],
        }
        .normalized()
    }
}

/// Relevance vocabulary for the domain gate.
///
/// Maintained separately from the category keywords. `doctor` and `medical`
/// select the health category but are not listed here.
fn domain_vocabulary() -> Vec<String> {
    list(&[
        // English
        "government", "service", "scheme", "certificate", "aadhaar", "apply",
        "application", "status", "office", "subsidy", "welfare", "document", "card",
        "pension", "old age", "widow", "ration", "pds", "health scheme", "health card",
        "hospital", "insurance", "ayushman", "land record", "land survey",
        "land ownership", "property", "survey number", "patta",
        "mutation", "scholarship", "fee reimbursement", "student", "complaint",
        "grievance",
        // Hindi
        "सरकारी", "सेवा", "योजना", "प्रमाण पत्र", "आधार", "आवेदन", "कार्ड", "पेंशन",
        "वृद्धावस्था", "राशन", "स्वास्थ्य", "अस्पताल", "बीमा", "आयुष्मान", "भूमि",
        "ज़मीन", "जमीन", "खसरा", "छात्रवृत्ति", "स्कॉलरशिप", "शिकायत",
        // Telugu
        "ప్రభుత్వ", "సేవ", "పథకం", "ధృవీకరణ", "ఆధార్", "దరఖాస్తు", "కార్డ్", "పెన్షన్",
        "పింఛన్", "రేషన్", "ఆరోగ్య", "ఆసుపత్రి", "బీమా", "భూమి", "పట్టా",
        "స్కాలర్‌షిప్", "ఉపకార వేతన", "ఫిర్యాదు",
        // Tamil
        "அரசு", "சேவை", "திட்ட", "சான்றிதழ்", "ஆதார்", "விண்ணப்ப", "கார்டு",
        "ஓய்வூதிய", "ரேஷன்", "குடும்ப அட்டை", "சுகாதார", "மருத்துவ", "காப்பீடு",
        "நிலம்", "நில பதிவு", "பட்டா", "உதவித்தொகை", "புகார்",
        // Kannada
        "ಸರ್ಕಾರಿ", "ಸೇವೆ", "ಯೋಜನೆ", "ಪ್ರಮಾಣಪತ್ರ", "ಆಧಾರ್", "ಅರ್ಜಿ", "ಕಾರ್ಡ್", "ಪಿಂಚಣಿ",
        "ರೇಷನ್", "ಪಡಿತರ", "ಆರೋಗ್ಯ", "ಆಸ್ಪತ್ರೆ", "ವಿಮೆ", "ಭೂಮಿ", "ಪಹಣಿ",
        "ವಿದ್ಯಾರ್ಥಿವೇತನ", "ದೂರು",
    ])
}

fn pension() -> ServiceCategory {
    ServiceCategory {
        id: "pension".to_string(),
        label: text(
            "Check pension status",
            "पेंशन स्थिति जांचें",
            "పెన్షన్ స్థితి తనిఖీ చేయండి",
            "ஓய்வூதிய நிலையைச் சரிபார்க்கவும்",
            "ಪಿಂಚಣಿ ಸ್ಥಿತಿಯನ್ನು ಪರಿಶೀಲಿಸಿ",
        ),
        keywords: lists(
            &["pension", "old age", "widow"],
            &["पेंशन", "वृद्धावस्था"],
            &["పెన్షన్", "పింఛన్"],
            &["ஓய்வூதிய"],
            &["ಪಿಂಚಣಿ"],
        ),
        templates: lists(
            &[
                "Your pension application (ID: PEN2024001234) has been approved! ₹5,000 will be credited to your account on the 1st of every month.",
                "Pension application PEN2024001234 is active. The next ₹5,000 instalment reaches your bank account on the 1st of the month.",
            ],
            &[
                "आपकी पेंशन का आवेदन (ID: PEN2024001234) स्वीकृत हो गया है! हर महीने की 1 तारीख को ₹5,000 आपके खाते में जमा होंगे।",
                "पेंशन आवेदन PEN2024001234 सक्रिय है। अगली किस्त ₹5,000 महीने की 1 तारीख को जमा होगी।",
            ],
            &[
                "మీ పెన్షన్ దరఖాస్తు (ID: PEN2024001234) ఆమోదించబడింది! ప్రతి నెల 1వ తేదీన ₹5,000 మీ ఖాతాలో జమ చేయబడుతుంది.",
                "పెన్షన్ దరఖాస్తు PEN2024001234 సక్రియంగా ఉంది. తదుపరి ₹5,000 నెల 1వ తేదీన జమ అవుతుంది.",
            ],
            &[
                "உங்கள் ஓய்வூதிய விண்ணப்பம் (ID: PEN2024001234) அங்கீகரிக்கப்பட்டுள்ளது! ஒவ்வொரு மாதமும் 1ஆம் தேதி ₹5,000 உங்கள் கணக்கில் வரவு வைக்கப்படும்.",
                "ஓய்வூதிய விண்ணப்பம் PEN2024001234 செயலில் உள்ளது. அடுத்த ₹5,000 மாதம் 1ஆம் தேதி வரவு வைக்கப்படும்.",
            ],
            &[
                "ನಿಮ್ಮ ಪಿಂಚಣಿ ಅರ್ಜಿ (ID: PEN2024001234) ಅನುಮೋದಿಸಲಾಗಿದೆ! ಪ್ರತಿ ತಿಂಗಳ 1ನೇ ದಿನ ₹5,000 ನಿಮ್ಮ ಖಾತೆಗೆ ಜಮಾ ಮಾಡಲಾಗುತ್ತದೆ.",
                "ಪಿಂಚಣಿ ಅರ್ಜಿ PEN2024001234 ಸಕ್ರಿಯವಾಗಿದೆ. ಮುಂದಿನ ₹5,000 ತಿಂಗಳ 1 ರಂದು ಜಮಾ ಆಗುತ್ತದೆ.",
            ],
        ),
    }
}

fn ration_card() -> ServiceCategory {
    ServiceCategory {
        id: "ration_card".to_string(),
        label: text(
            "Apply for ration card",
            "राशन कार्ड के लिए आवेदन",
            "రేషన్ కార్డ్ కోసం దరఖాస్తు",
            "ரேஷன் கார்டுக்கு விண்ணப்பிக்கவும்",
            "ರೇಷನ್ ಕಾರ್ಡ್‌ಗಾಗಿ ಅರ್ಜಿ ಸಲ್ಲಿಸಿ",
        ),
        keywords: lists(
            &["ration card", "ration shop", "ration rice", "pds"],
            &["राशन"],
            &["రేషన్"],
            &["ரேஷன்", "குடும்ப அட்டை"],
            &["ರೇಷನ್", "ಪಡಿತರ"],
        ),
        templates: lists(
            &[
                "To apply for a ration card, you'll need: Aadhaar card, address proof, and income certificate. Would you like me to help you with the application process?",
                "Ration card applications are accepted at your village secretariat or online. Keep your Aadhaar card, address proof and income certificate ready.",
            ],
            &[
                "राशन कार्ड के लिए आपको चाहिए: आधार कार्ड, पता प्रमाण, और आय प्रमाण पत्र। क्या आप चाहते हैं कि मैं आवेदन प्रक्रिया में आपकी सहायता करूं?",
                "राशन कार्ड के आवेदन ग्राम सचिवालय में या ऑनलाइन स्वीकार किए जाते हैं। आधार कार्ड, पता प्रमाण और आय प्रमाण पत्र तैयार रखें।",
            ],
            &[
                "రేషన్ కార్డ్ కోసం మీకు అవసరం: ఆధార్ కార్డ్, చిరునామా రుజువు మరియు ఆదాయ ధృవీకరణ పత్రం. నేను దరఖాస్తు ప్రక్రియలో మీకు సహాయం చేయగలను.",
                "రేషన్ కార్డ్ దరఖాస్తులను గ్రామ సచివాలయంలో లేదా ఆన్‌లైన్‌లో స్వీకరిస్తారు. ఆధార్ కార్డ్, చిరునామా రుజువు మరియు ఆదాయ ధృవీకరణ పత్రం సిద్ధంగా ఉంచండి.",
            ],
            &[
                "ரேஷன் கார்டுக்கு உங்களுக்கு தேவை: ஆதார் கார்டு, முகவரி சான்று மற்றும் வருமான சான்றிதழ். விண்ணப்ப செயல்முறையில் நான் உங்களுக்கு உதவ முடியும்.",
                "ரேஷன் கார்டு விண்ணப்பங்கள் கிராம செயலகத்தில் அல்லது ஆன்லைனில் ஏற்றுக்கொள்ளப்படும். ஆதார் கார்டு, முகவரி சான்று மற்றும் வருமான சான்றிதழை தயாராக வைத்திருக்கவும்.",
            ],
            &[
                "ರೇಷನ್ ಕಾರ್ಡ್‌ಗಾಗಿ ನಿಮಗೆ ಅಗತ್ಯವಿದೆ: ಆಧಾರ್ ಕಾರ್ಡ್, ವಿಳಾಸ ಪುರಾವೆ ಮತ್ತು ಆದಾಯ ಪ್ರಮಾಣಪತ್ರ. ಅರ್ಜಿ ಪ್ರಕ್ರಿಯೆಯಲ್ಲಿ ನಾನು ನಿಮಗೆ ಸಹಾಯ ಮಾಡಬಹುದು.",
                "ರೇಷನ್ ಕಾರ್ಡ್ ಅರ್ಜಿಗಳನ್ನು ಗ್ರಾಮ ಪಂಚಾಯಿತಿಯಲ್ಲಿ ಅಥವಾ ಆನ್‌ಲೈನ್‌ನಲ್ಲಿ ಸ್ವೀಕರಿಸಲಾಗುತ್ತದೆ. ಆಧಾರ್ ಕಾರ್ಡ್, ವಿಳಾಸ ಪುರಾವೆ ಮತ್ತು ಆದಾಯ ಪ್ರಮಾಣಪತ್ರ ಸಿದ್ಧವಾಗಿಡಿ.",
            ],
        ),
    }
}

fn health_scheme() -> ServiceCategory {
    ServiceCategory {
        id: "health_scheme".to_string(),
        label: text(
            "Health scheme registration",
            "स्वास्थ्य योजना पंजीकरण",
            "ఆరోగ్య పథకం నమోదు",
            "சுகாதார திட்ட பதிவு",
            "ಆರೋಗ್ಯ ಯೋಜನೆ ನೋಂದಣಿ",
        ),
        keywords: lists(
            &[
                "health scheme",
                "health card",
                "hospital",
                "insurance",
                "ayushman",
                "doctor",
                "medical",
            ],
            &["स्वास्थ्य", "अस्पताल", "बीमा", "आयुष्मान"],
            &["ఆరోగ్య", "ఆసుపత్రి", "బీమా"],
            &["சுகாதார", "மருத்துவ", "காப்பீடு"],
            &["ಆರೋಗ್ಯ", "ಆಸ್ಪತ್ರೆ", "ವಿಮೆ"],
        ),
        templates: lists(
            &[
                "You can register for the government health scheme with your Aadhaar card and ration card. Families are covered up to ₹5 lakh per year for hospital treatment.",
                "Health scheme registration is open at your nearest primary health centre. Carry your Aadhaar card and a family photo; the health card is issued within 15 days.",
            ],
            &[
                "सरकारी स्वास्थ्य योजना में पंजीकरण के लिए आधार कार्ड और राशन कार्ड आवश्यक है। परिवार को अस्पताल उपचार के लिए प्रति वर्ष ₹5 लाख तक का कवर मिलता है।",
                "स्वास्थ्य योजना पंजीकरण नज़दीकी प्राथमिक स्वास्थ्य केंद्र में उपलब्ध है। आधार कार्ड और परिवार की फोटो साथ लाएं।",
            ],
            &[
                "ప్రభుత్వ ఆరోగ్య పథకంలో నమోదు కోసం ఆధార్ కార్డ్ మరియు రేషన్ కార్డ్ అవసరం. కుటుంబానికి సంవత్సరానికి ₹5 లక్షల వరకు ఆసుపత్రి చికిత్స కవరేజ్ లభిస్తుంది.",
            ],
            &[
                "அரசு சுகாதார திட்டத்தில் பதிவு செய்ய ஆதார் கார்டு மற்றும் ரேஷன் கார்டு தேவை. குடும்பத்திற்கு ஆண்டுக்கு ₹5 லட்சம் வரை மருத்துவமனை சிகிச்சை காப்பீடு கிடைக்கும்.",
            ],
            &[
                "ಸರ್ಕಾರಿ ಆರೋಗ್ಯ ಯೋಜನೆಗೆ ನೋಂದಣಿ ಮಾಡಲು ಆಧಾರ್ ಕಾರ್ಡ್ ಮತ್ತು ರೇಷನ್ ಕಾರ್ಡ್ ಅಗತ್ಯ. ಕುಟುಂಬಕ್ಕೆ ವರ್ಷಕ್ಕೆ ₹5 ಲಕ್ಷದವರೆಗೆ ಆಸ್ಪತ್ರೆ ಚಿಕಿತ್ಸೆ ವಿಮೆ ಲಭ್ಯ.",
            ],
        ),
    }
}

fn land_records() -> ServiceCategory {
    ServiceCategory {
        id: "land_records".to_string(),
        label: text(
            "Land records verification",
            "भूमि रिकॉर्ड सत्यापन",
            "భూమి రికార్డుల ధృవీకరణ",
            "நில பதிவுகள் சரிபார்ப்பு",
            "ಭೂಮಿ ದಾಖಲೆಗಳ ಪರಿಶೀಲನೆ",
        ),
        keywords: lists(
            &[
                "land record",
                "land survey",
                "land ownership",
                "property",
                "survey number",
                "patta",
                "mutation",
            ],
            &["भूमि", "ज़मीन", "जमीन", "खसरा"],
            &["భూమి", "పట్టా"],
            &["நிலம்", "நில பதிவு", "பட்டா"],
            &["ಭೂಮಿ", "ಪಹಣಿ"],
        ),
        templates: lists(
            &[
                "Land records can be verified online with your survey number. Mutation requests are processed by the Tahsildar office within 30 days.",
                "To verify land ownership, share your district, village and survey number. A certified copy of the record of rights costs ₹25.",
            ],
            &[
                "भूमि रिकॉर्ड आपके खसरा नंबर से ऑनलाइन सत्यापित किए जा सकते हैं। नामांतरण अनुरोध तहसील कार्यालय द्वारा 30 दिनों में निपटाए जाते हैं।",
            ],
            &[
                "మీ సర్వే నంబర్‌తో భూమి రికార్డులను ఆన్‌లైన్‌లో ధృవీకరించవచ్చు. మ్యుటేషన్ అభ్యర్థనలను తహసీల్దార్ కార్యాలయం 30 రోజుల్లో పరిష్కరిస్తుంది.",
            ],
            &[
                "உங்கள் சர்வே எண் மூலம் நில பதிவுகளை ஆன்லைனில் சரிபார்க்கலாம். பட்டா மாற்ற கோரிக்கைகள் தாசில்தார் அலுவலகத்தால் 30 நாட்களில் தீர்க்கப்படும்.",
            ],
            &[
                "ನಿಮ್ಮ ಸರ್ವೆ ಸಂಖ್ಯೆಯೊಂದಿಗೆ ಭೂಮಿ ದಾಖಲೆಗಳನ್ನು ಆನ್‌ಲೈನ್‌ನಲ್ಲಿ ಪರಿಶೀಲಿಸಬಹುದು. ಖಾತಾ ಬದಲಾವಣೆ ಮನವಿಗಳನ್ನು ತಹಸೀಲ್ದಾರ್ ಕಚೇರಿ 30 ದಿನಗಳಲ್ಲಿ ಪರಿಹರಿಸುತ್ತದೆ.",
            ],
        ),
    }
}

fn scholarship() -> ServiceCategory {
    ServiceCategory {
        id: "scholarship".to_string(),
        label: text(
            "Scholarship applications",
            "छात्रवृत्ति आवेदन",
            "స్కాలర్‌షిప్ దరఖాస్తులు",
            "உதவித்தொகை விண்ணப்பங்கள்",
            "ವಿದ್ಯಾರ್ಥಿವೇತನ ಅರ್ಜಿಗಳು",
        ),
        keywords: lists(
            &["scholarship", "fee reimbursement", "student"],
            &["छात्रवृत्ति", "स्कॉलरशिप"],
            &["స్కాలర్‌షిప్", "ఉపకార వేతన"],
            &["உதவித்தொகை"],
            &["ವಿದ್ಯಾರ್ಥಿವೇತನ"],
        ),
        templates: lists(
            &[
                "Scholarship applications for this academic year are open until 31 October. You need your marks memo, income certificate, caste certificate and bank passbook.",
                "You can track your scholarship application with your application number. Approved amounts are paid directly into the student's bank account.",
            ],
            &[
                "इस शैक्षणिक वर्ष के लिए छात्रवृत्ति आवेदन 31 अक्टूबर तक खुले हैं। अंक पत्र, आय प्रमाण पत्र, जाति प्रमाण पत्र और बैंक पासबुक आवश्यक हैं।",
            ],
            &[
                "ఈ విద్యా సంవత్సరానికి స్కాలర్‌షిప్ దరఖాస్తులు అక్టోబర్ 31 వరకు అందుబాటులో ఉన్నాయి. మార్కుల మెమో, ఆదాయ ధృవీకరణ పత్రం, కుల ధృవీకరణ పత్రం మరియు బ్యాంక్ పాస్‌బుక్ అవసరం.",
            ],
            &[
                "இந்த கல்வியாண்டுக்கான உதவித்தொகை விண்ணப்பங்கள் அக்டோபர் 31 வரை திறந்திருக்கும். மதிப்பெண் சான்று, வருமான சான்றிதழ், சாதி சான்றிதழ் மற்றும் வங்கி கணக்குப் புத்தகம் தேவை.",
            ],
            &[
                "ಈ ಶೈಕ್ಷಣಿಕ ವರ್ಷದ ವಿದ್ಯಾರ್ಥಿವೇತನ ಅರ್ಜಿಗಳು ಅಕ್ಟೋಬರ್ 31 ರವರೆಗೆ ತೆರೆದಿವೆ. ಅಂಕಪಟ್ಟಿ, ಆದಾಯ ಪ್ರಮಾಣಪತ್ರ, ಜಾತಿ ಪ್ರಮಾಣಪತ್ರ ಮತ್ತು ಬ್ಯಾಂಕ್ ಪಾಸ್‌ಬುಕ್ ಅಗತ್ಯ.",
            ],
        ),
    }
}

fn complaint() -> ServiceCategory {
    ServiceCategory {
        id: "complaint".to_string(),
        label: text(
            "Complaint filing",
            "शिकायत दर्ज करना",
            "ఫిర్యాదు దాఖలు",
            "புகார் தாக்கல்",
            "ದೂರು ದಾಖಲಿಸುವುದು",
        ),
        keywords: lists(
            &["complaint", "grievance", "not received"],
            &["शिकायत"],
            &["ఫిర్యాదు"],
            &["புகார்"],
            &["ದೂರು"],
        ),
        templates: lists(
            &[
                "Your complaint has been registered with reference number GRV2024005678. The concerned department will respond within 7 working days.",
                "I can file a grievance for you. Please describe the issue, the office involved and the date it happened.",
            ],
            &[
                "आपकी शिकायत संदर्भ संख्या GRV2024005678 के साथ दर्ज कर ली गई है। संबंधित विभाग 7 कार्य दिवसों में जवाब देगा।",
            ],
            &[
                "మీ ఫిర్యాదు GRV2024005678 సూచన సంఖ్యతో నమోదు చేయబడింది. సంబంధిత శాఖ 7 పని దినాల్లో స్పందిస్తుంది.",
            ],
            &[
                "உங்கள் புகார் GRV2024005678 என்ற குறிப்பு எண்ணுடன் பதிவு செய்யப்பட்டது. சம்பந்தப்பட்ட துறை 7 வேலை நாட்களுக்குள் பதிலளிக்கும்.",
            ],
            &[
                "ನಿಮ್ಮ ದೂರು GRV2024005678 ಉಲ್ಲೇಖ ಸಂಖ್ಯೆಯೊಂದಿಗೆ ದಾಖಲಾಗಿದೆ. ಸಂಬಂಧಿತ ಇಲಾಖೆ 7 ಕೆಲಸದ ದಿನಗಳಲ್ಲಿ ಪ್ರತಿಕ್ರಿಯಿಸುತ್ತದೆ.",
            ],
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gramabot_core::Language;

    #[test]
    fn test_builtin_is_valid() {
        ResponseCatalog::builtin().validate().unwrap();
    }

    #[test]
    fn test_builtin_category_order() {
        let ids: Vec<_> = ResponseCatalog::builtin()
            .categories
            .iter()
            .map(|c| c.id.clone())
            .collect();
        assert_eq!(
            ids,
            vec![
                "pension",
                "ration_card",
                "health_scheme",
                "land_records",
                "scholarship",
                "complaint"
            ]
        );
    }

    #[test]
    fn test_builtin_covers_every_language() {
        let catalog = ResponseCatalog::builtin();
        for lang in Language::ALL {
            assert!(catalog.out_of_domain.get(lang).is_some(), "{lang}");
            assert!(catalog.generic.get(lang).is_some_and(|v| !v.is_empty()));
            for cat in &catalog.categories {
                assert!(!cat.keywords_for(lang).is_empty(), "{} {lang}", cat.id);
                assert!(cat.templates.get(lang).is_some_and(|v| !v.is_empty()));
                assert!(cat.label.get(lang).is_some());
            }
        }
    }

    #[test]
    fn test_every_pension_language_mentions_application_id() {
        let catalog = ResponseCatalog::builtin();
        let pension = catalog.category("pension").unwrap();
        for lang in Language::ALL {
            assert!(pension
                .templates_for(lang)
                .iter()
                .any(|t| t.contains("PEN2024001234")));
        }
    }

    #[test]
    fn test_gate_vocabulary_is_independent_of_category_keywords() {
        let catalog = ResponseCatalog::builtin();
        let health = catalog.category("health_scheme").unwrap();
        assert!(health.keywords_for(Language::English).contains(&"doctor".to_string()));
        assert!(!catalog.domain_vocabulary.contains(&"doctor".to_string()));
    }
}
