//! Static en/mr/hi string table

use super::{Catalog, Language};

/// Menus with a fixed prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuId {
    Language,
    Main,
    Complaints,
    Schemes,
    Voter,
    Events,
    Works,
    AreaProblems,
    Contact,
    Other,
}

/// Messages and templates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageId {
    // General
    InvalidOption,
    LanguageSelected,
    InvalidMobile,
    InvalidAge,
    ComingSoon,
    SubmissionFailed,
    LookupFailed,
    // Complaint form
    ComplaintNamePrompt,
    ComplaintMobilePrompt,
    ComplaintTypePrompt,
    ComplaintDescriptionPrompt,
    ComplaintLocationPrompt,
    ComplaintPhotoPrompt,
    ComplaintRegistered,
    // Complaint lookups
    StatusMobilePrompt,
    ListMobilePrompt,
    NoComplaintsFound,
    ComplaintStatus,
    ComplaintListHeader,
    ComplaintListItem,
    // Schemes
    SchemeListHeader,
    NoSchemes,
    SchemeMorePrompt,
    NoMoreSchemes,
    SchemeSearchPrompt,
    SearchTooShort,
    SchemeSearchResults,
    NoSchemesForQuery,
    SchemeAgePrompt,
    SchemeGenderPrompt,
    SchemeCategoryPrompt,
    SchemesForProfileHeader,
    HowToApply,
    // Voters
    VoterSearchPrompt,
    NoVotersFound,
    VoterResultsHeader,
    VoterItem,
    // Events
    EventsHeader,
    NoEvents,
    EventGallery,
    // Works
    WorksHeader,
    NoWorks,
    WorkItem,
    ImprovementsHeader,
    NoImprovements,
    // Area problems
    AreaProblemDescriptionPrompt,
    AreaProblemLocationPrompt,
    AreaProblemReported,
    AreaProblemsHeader,
    NoAreaProblems,
    // Contact
    ContactAddress,
    ContactHours,
    ContactPhone,
    ContactEmail,
    ContactSocial,
    DefaultOfficeAddress,
    DefaultOfficeHours,
    NotAvailable,
    // Letters
    LetterTypesHeader,
    NoLetterTypes,
    LetterNamePrompt,
    LetterMobilePrompt,
    LetterAddressPrompt,
    LetterPurposePrompt,
    LetterRequested,
    // Personal requests
    PersonalNamePrompt,
    PersonalMobilePrompt,
    PersonalDescriptionPrompt,
    PersonalRequestReceived,
    // Other services
    MeetingDiary,
    PhotoGallery,
    WardBudget,
    // Surveys
    NoActiveSurvey,
    SurveyIntro,
    SurveyQuestionHeader,
    SurveyYesNoOptions,
    SurveyRatingHint,
    SurveyTextHint,
    SurveyInvalidYesNo,
    SurveyInvalidChoice,
    SurveyInvalidRating,
    SurveyInvalidText,
    SurveyAnswerRecorded,
    SurveyYes,
    SurveyNo,
    SurveyCompleted,
}

const NAV_FOOTER_EN: &str = "\n\n0️⃣ Change language | 9️⃣ Main menu";

impl MenuId {
    fn texts(self) -> [&'static str; 3] {
        match self {
            MenuId::Language => [
                "🙏 Welcome! नमस्कार! नमस्ते!\n\nPlease choose your language / भाषा निवडा / भाषा चुनें:\n\n1️⃣ English\n2️⃣ मराठी\n3️⃣ हिंदी",
                "🙏 Welcome! नमस्कार! नमस्ते!\n\nPlease choose your language / भाषा निवडा / भाषा चुनें:\n\n1️⃣ English\n2️⃣ मराठी\n3️⃣ हिंदी",
                "🙏 Welcome! नमस्कार! नमस्ते!\n\nPlease choose your language / भाषा निवडा / भाषा चुनें:\n\n1️⃣ English\n2️⃣ मराठी\n3️⃣ हिंदी",
            ],
            MenuId::Main => [
                "🏛️ *Main Menu*\n\n1️⃣ Complaints\n2️⃣ Government Schemes\n3️⃣ Voter Services\n4️⃣ Events\n5️⃣ Development Works\n6️⃣ Area Problems\n7️⃣ Contact Office\n8️⃣ Other Services\n\n_Reply with a number._\n0️⃣ Change language",
                "🏛️ *मुख्य मेनू*\n\n1️⃣ तक्रारी\n2️⃣ सरकारी योजना\n3️⃣ मतदार सेवा\n4️⃣ कार्यक्रम\n5️⃣ विकास कामे\n6️⃣ प्रभाग समस्या\n7️⃣ कार्यालय संपर्क\n8️⃣ इतर सेवा\n\n_क्रमांक पाठवा._\n0️⃣ भाषा बदला",
                "🏛️ *मुख्य मेनू*\n\n1️⃣ शिकायतें\n2️⃣ सरकारी योजनाएं\n3️⃣ मतदाता सेवाएं\n4️⃣ कार्यक्रम\n5️⃣ विकास कार्य\n6️⃣ क्षेत्र की समस्याएं\n7️⃣ कार्यालय संपर्क\n8️⃣ अन्य सेवाएं\n\n_नंबर भेजें._\n0️⃣ भाषा बदलें",
            ],
            MenuId::Complaints => [
                "📝 *Complaints*\n\n1️⃣ Submit new complaint\n2️⃣ Check complaint status\n3️⃣ View my complaints\n\n0️⃣ Change language | 9️⃣ Main menu",
                "📝 *तक्रारी*\n\n1️⃣ नवीन तक्रार नोंदवा\n2️⃣ तक्रार स्थिती तपासा\n3️⃣ माझ्या तक्रारी पहा\n\n0️⃣ भाषा बदला | 9️⃣ मुख्य मेनू",
                "📝 *शिकायतें*\n\n1️⃣ नई शिकायत दर्ज करें\n2️⃣ शिकायत की स्थिति जांचें\n3️⃣ मेरी शिकायतें देखें\n\n0️⃣ भाषा बदलें | 9️⃣ मुख्य मेनू",
            ],
            MenuId::Schemes => [
                "🏛️ *Government Schemes*\n\n1️⃣ View all schemes\n2️⃣ Search scheme\n3️⃣ Schemes for me\n4️⃣ How to apply\n\n0️⃣ Change language | 9️⃣ Main menu",
                "🏛️ *सरकारी योजना*\n\n1️⃣ सर्व योजना पहा\n2️⃣ योजना शोधा\n3️⃣ माझ्यासाठी योजना\n4️⃣ अर्ज कसा करावा\n\n0️⃣ भाषा बदला | 9️⃣ मुख्य मेनू",
                "🏛️ *सरकारी योजनाएं*\n\n1️⃣ सभी योजनाएं देखें\n2️⃣ योजना खोजें\n3️⃣ मेरे लिए योजनाएं\n4️⃣ आवेदन कैसे करें\n\n0️⃣ भाषा बदलें | 9️⃣ मुख्य मेनू",
            ],
            MenuId::Voter => [
                "🗳️ *Voter Services*\n\n1️⃣ Search voter\n2️⃣ Voter card status\n3️⃣ Polling booth\n4️⃣ Election results\n\n0️⃣ Change language | 9️⃣ Main menu",
                "🗳️ *मतदार सेवा*\n\n1️⃣ मतदार शोधा\n2️⃣ मतदार कार्ड स्थिती\n3️⃣ मतदान केंद्र\n4️⃣ निवडणूक निकाल\n\n0️⃣ भाषा बदला | 9️⃣ मुख्य मेनू",
                "🗳️ *मतदाता सेवाएं*\n\n1️⃣ मतदाता खोजें\n2️⃣ मतदाता कार्ड स्थिति\n3️⃣ मतदान केंद्र\n4️⃣ चुनाव परिणाम\n\n0️⃣ भाषा बदलें | 9️⃣ मुख्य मेनू",
            ],
            MenuId::Events => [
                "🎉 *Events*\n\n1️⃣ Upcoming events\n2️⃣ Today's events\n3️⃣ Past events\n4️⃣ Event gallery\n\n0️⃣ Change language | 9️⃣ Main menu",
                "🎉 *कार्यक्रम*\n\n1️⃣ आगामी कार्यक्रम\n2️⃣ आजचे कार्यक्रम\n3️⃣ मागील कार्यक्रम\n4️⃣ कार्यक्रम गॅलरी\n\n0️⃣ भाषा बदला | 9️⃣ मुख्य मेनू",
                "🎉 *कार्यक्रम*\n\n1️⃣ आगामी कार्यक्रम\n2️⃣ आज के कार्यक्रम\n3️⃣ पिछले कार्यक्रम\n4️⃣ कार्यक्रम गैलरी\n\n0️⃣ भाषा बदलें | 9️⃣ मुख्य मेनू",
            ],
            MenuId::Works => [
                "🏗️ *Development Works*\n\n1️⃣ Works in progress\n2️⃣ Completed works\n3️⃣ Planned works\n4️⃣ Possible improvements\n\n0️⃣ Change language | 9️⃣ Main menu",
                "🏗️ *विकास कामे*\n\n1️⃣ सुरू असलेली कामे\n2️⃣ पूर्ण झालेली कामे\n3️⃣ नियोजित कामे\n4️⃣ संभाव्य सुधारणा\n\n0️⃣ भाषा बदला | 9️⃣ मुख्य मेनू",
                "🏗️ *विकास कार्य*\n\n1️⃣ चल रहे कार्य\n2️⃣ पूर्ण कार्य\n3️⃣ नियोजित कार्य\n4️⃣ संभावित सुधार\n\n0️⃣ भाषा बदलें | 9️⃣ मुख्य मेनू",
            ],
            MenuId::AreaProblems => [
                "📍 *Area Problems*\n\n1️⃣ Report a problem\n2️⃣ Open problems in the ward\n3️⃣ My reported problems\n4️⃣ Solved problems\n\n0️⃣ Change language | 9️⃣ Main menu",
                "📍 *प्रभाग समस्या*\n\n1️⃣ समस्या नोंदवा\n2️⃣ प्रभागातील प्रलंबित समस्या\n3️⃣ मी नोंदवलेल्या समस्या\n4️⃣ सोडवलेल्या समस्या\n\n0️⃣ भाषा बदला | 9️⃣ मुख्य मेनू",
                "📍 *क्षेत्र की समस्याएं*\n\n1️⃣ समस्या दर्ज करें\n2️⃣ वार्ड की लंबित समस्याएं\n3️⃣ मेरी दर्ज समस्याएं\n4️⃣ हल की गई समस्याएं\n\n0️⃣ भाषा बदलें | 9️⃣ मुख्य मेनू",
            ],
            MenuId::Contact => [
                "📞 *Contact Office*\n\n1️⃣ Office address\n2️⃣ Office hours\n3️⃣ Phone numbers\n4️⃣ Email\n5️⃣ Social media\n\n0️⃣ Change language | 9️⃣ Main menu",
                "📞 *कार्यालय संपर्क*\n\n1️⃣ कार्यालय पत्ता\n2️⃣ कार्यालय वेळ\n3️⃣ फोन क्रमांक\n4️⃣ ईमेल\n5️⃣ सोशल मीडिया\n\n0️⃣ भाषा बदला | 9️⃣ मुख्य मेनू",
                "📞 *कार्यालय संपर्क*\n\n1️⃣ कार्यालय पता\n2️⃣ कार्यालय समय\n3️⃣ फोन नंबर\n4️⃣ ईमेल\n5️⃣ सोशल मीडिया\n\n0️⃣ भाषा बदलें | 9️⃣ मुख्य मेनू",
            ],
            MenuId::Other => [
                "📂 *Other Services*\n\n1️⃣ Request a letter\n2️⃣ Personal request\n3️⃣ Meeting diary\n4️⃣ Photo gallery\n5️⃣ Ward budget\n6️⃣ Take the ward survey\n\n0️⃣ Change language | 9️⃣ Main menu",
                "📂 *इतर सेवा*\n\n1️⃣ पत्र/दाखला विनंती\n2️⃣ वैयक्तिक विनंती\n3️⃣ मीटिंग डायरी\n4️⃣ फोटो गॅलरी\n5️⃣ प्रभाग अर्थसंकल्प\n6️⃣ प्रभाग सर्वेक्षण\n\n0️⃣ भाषा बदला | 9️⃣ मुख्य मेनू",
                "📂 *अन्य सेवाएं*\n\n1️⃣ पत्र अनुरोध\n2️⃣ व्यक्तिगत अनुरोध\n3️⃣ मीटिंग डायरी\n4️⃣ फोटो गैलरी\n5️⃣ वार्ड बजट\n6️⃣ वार्ड सर्वेक्षण\n\n0️⃣ भाषा बदलें | 9️⃣ मुख्य मेनू",
            ],
        }
    }
}

impl MessageId {
    #[allow(clippy::too_many_lines)]
    fn texts(self) -> [&'static str; 3] {
        match self {
            MessageId::InvalidOption => [
                "❌ Invalid option. Please choose from the menu.",
                "❌ अवैध पर्याय. कृपया मेनूमधून निवडा.",
                "❌ अमान्य विकल्प। कृपया मेनू से चुनें।",
            ],
            MessageId::LanguageSelected => [
                "✅ Language set to English.",
                "✅ भाषा मराठी निवडली.",
                "✅ भाषा हिंदी चुनी गई।",
            ],
            MessageId::InvalidMobile => [
                "❌ Please enter a valid 10-digit mobile number.",
                "❌ कृपया वैध १० अंकी मोबाइल नंबर प्रविष्ट करा.",
                "❌ कृपया एक वैध 10 अंकों का मोबाइल नंबर दर्ज करें।",
            ],
            MessageId::InvalidAge => [
                "❌ Please enter your age as a number between 1 and 120.",
                "❌ कृपया तुमचे वय 1 ते 120 मधील संख्येत प्रविष्ट करा.",
                "❌ कृपया अपनी उम्र 1 से 120 के बीच संख्या में दर्ज करें।",
            ],
            MessageId::ComingSoon => [
                "⏳ Coming soon!",
                "⏳ लवकरच येत आहे!",
                "⏳ जल्द आ रहा है!",
            ],
            MessageId::SubmissionFailed => [
                "❌ Sorry, we could not save your request. Please try again later.",
                "❌ माफ करा, तुमची विनंती जतन करता आली नाही. कृपया नंतर पुन्हा प्रयत्न करा.",
                "❌ क्षमा करें, आपका अनुरोध सहेजा नहीं जा सका। कृपया बाद में पुनः प्रयास करें।",
            ],
            MessageId::LookupFailed => [
                "❌ Sorry, this information is not available right now. Please try again later.",
                "❌ माफ करा, ही माहिती सध्या उपलब्ध नाही. कृपया नंतर पुन्हा प्रयत्न करा.",
                "❌ क्षमा करें, यह जानकारी अभी उपलब्ध नहीं है। कृपया बाद में पुनः प्रयास करें।",
            ],
            MessageId::ComplaintNamePrompt => [
                "👤 Please enter your *full name*:",
                "👤 कृपया तुमचे *पूर्ण नाव* प्रविष्ट करा:",
                "👤 कृपया अपना *पूरा नाम* दर्ज करें:",
            ],
            MessageId::ComplaintMobilePrompt => [
                "📱 Please enter your *10-digit mobile number*:",
                "📱 कृपया तुमचा *१० अंकी मोबाइल नंबर* प्रविष्ट करा:",
                "📱 कृपया अपना *10 अंकों का मोबाइल नंबर* दर्ज करें:",
            ],
            MessageId::ComplaintTypePrompt => [
                "📂 Select the complaint type:\n\n1️⃣ Road\n2️⃣ Water\n3️⃣ Electricity\n4️⃣ Waste\n5️⃣ Street lights\n6️⃣ Drainage\n7️⃣ Other",
                "📂 तक्रारीचा प्रकार निवडा:\n\n1️⃣ रस्ते\n2️⃣ पाणीपुरवठा\n3️⃣ वीजपुरवठा\n4️⃣ कचरा/स्वच्छता\n5️⃣ स्ट्रीट लाइट\n6️⃣ गटार/ड्रेनेज\n7️⃣ इतर",
                "📂 शिकायत का प्रकार चुनें:\n\n1️⃣ सड़कें\n2️⃣ पानी की आपूर्ति\n3️⃣ बिजली\n4️⃣ कचरा/सफाई\n5️⃣ स्ट्रीट लाइट\n6️⃣ नाली/ड्रेनेज\n7️⃣ अन्य",
            ],
            MessageId::ComplaintDescriptionPrompt => [
                "✍️ Please describe the problem:",
                "✍️ कृपया समस्येचे वर्णन करा:",
                "✍️ कृपया समस्या का विवरण दें:",
            ],
            MessageId::ComplaintLocationPrompt => [
                "📍 Please enter the location / area of the problem:",
                "📍 कृपया समस्येचे ठिकाण / परिसर प्रविष्ट करा:",
                "📍 कृपया समस्या का स्थान / क्षेत्र दर्ज करें:",
            ],
            MessageId::ComplaintPhotoPrompt => [
                "📷 Send a photo link of the problem, or send *0* to skip.",
                "📷 समस्येच्या फोटोची लिंक पाठवा, किंवा वगळण्यासाठी *0* पाठवा.",
                "📷 समस्या की फोटो लिंक भेजें, या छोड़ने के लिए *0* भेजें।",
            ],
            MessageId::ComplaintRegistered => [
                "✅ *Complaint registered successfully!*\n\nComplaint ID: #{id}\nWe will contact you shortly.",
                "✅ *तक्रार यशस्वीरित्या नोंदवली!*\n\nतक्रार क्रमांक: #{id}\nआम्ही लवकरच संपर्क करू.",
                "✅ *शिकायत सफलतापूर्वक दर्ज हुई!*\n\nशिकायत ID: #{id}\nहम जल्द ही संपर्क करेंगे।",
            ],
            MessageId::StatusMobilePrompt => [
                "📱 Please enter your mobile number to check complaint status:",
                "📱 तक्रार स्थिती तपासण्यासाठी कृपया तुमचा मोबाइल नंबर प्रविष्ट करा:",
                "📱 शिकायत की स्थिति जांचने के लिए कृपया अपना मोबाइल नंबर दर्ज करें:",
            ],
            MessageId::ListMobilePrompt => [
                "📱 Please enter your mobile number to view your complaints:",
                "📱 तुमच्या तक्रारी पाहण्यासाठी कृपया तुमचा मोबाइल नंबर प्रविष्ट करा:",
                "📱 अपनी शिकायतें देखने के लिए कृपया अपना मोबाइल नंबर दर्ज करें:",
            ],
            MessageId::NoComplaintsFound => [
                "❌ No complaints found for this mobile number.",
                "❌ या मोबाइल नंबरसाठी कोणत्याही तक्रारी सापडल्या नाहीत.",
                "❌ इस मोबाइल नंबर के लिए कोई शिकायत नहीं मिली।",
            ],
            MessageId::ComplaintStatus => [
                "{emoji} *Complaint Status*\n\nComplaint ID: #{id}\nStatus: {status}\nType: {kind}\n\nProblem: {description}\n\n_Latest complaint shown. Total: {total}_",
                "{emoji} *तक्रार स्थिती*\n\nतक्रार क्रमांक: #{id}\nस्थिती: {status}\nप्रकार: {kind}\n\nसमस्या: {description}\n\n_नवीनतम तक्रार दर्शविली. एकूण: {total}_",
                "{emoji} *शिकायत स्थिति*\n\nशिकायत ID: #{id}\nस्थिति: {status}\nश्रेणी: {kind}\n\nसमस्या: {description}\n\n_नवीनतम शिकायत दिखाई गई। कुल: {total}_",
            ],
            MessageId::ComplaintListHeader => [
                "📋 *Your Complaints* ({count})\n\n",
                "📋 *तुमच्या तक्रारी* ({count})\n\n",
                "📋 *आपकी शिकायतें* ({count})\n\n",
            ],
            MessageId::ComplaintListItem => [
                "{index}. {emoji} ID: #{id}\n   {kind} - {status}\n   {date}\n\n",
                "{index}. {emoji} क्रमांक: #{id}\n   {kind} - {status}\n   {date}\n\n",
                "{index}. {emoji} ID: #{id}\n   {kind} - {status}\n   {date}\n\n",
            ],
            MessageId::SchemeListHeader => [
                "🏛️ *Government Schemes* (showing {count})\n\n",
                "🏛️ *सरकारी योजना* ({count} योजना दर्शवित)\n\n",
                "🏛️ *सरकारी योजनाएं* ({count} योजनाएं दिखा रहे हैं)\n\n",
            ],
            MessageId::NoSchemes => [
                "No schemes available at the moment.",
                "सध्या कोणत्याही योजना उपलब्ध नाहीत.",
                "फिलहाल कोई योजनाएं उपलब्ध नहीं हैं।",
            ],
            MessageId::SchemeMorePrompt => [
                "📄 Send *MORE* to see more schemes or press 9 for menu",
                "📄 अधिक योजना पाहण्यासाठी *MORE* पाठवा किंवा मेनूसाठी 9 दाबा",
                "📄 अधिक योजनाएं देखने के लिए *MORE* भेजें या मेनू के लिए 9 दबाएं",
            ],
            MessageId::NoMoreSchemes => [
                "✅ No more schemes to display.",
                "✅ दर्शविण्यासाठी आणखी योजना नाहीत.",
                "✅ प्रदर्शित करने के लिए और योजनाएं नहीं हैं।",
            ],
            MessageId::SchemeSearchPrompt => [
                "🔍 Enter scheme name or keyword to search:",
                "🔍 शोध करण्यासाठी योजनेचे नाव किंवा मुख्य शब्द प्रविष्ट करा:",
                "🔍 खोजने के लिए योजना का नाम या कीवर्ड दर्ज करें:",
            ],
            MessageId::SearchTooShort => [
                "Please enter at least 2 characters to search.",
                "कृपया शोधण्यासाठी किमान २ वर्ण प्रविष्ट करा.",
                "कृपया खोजने के लिए कम से कम 2 अक्षर दर्ज करें।",
            ],
            MessageId::SchemeSearchResults => [
                "🔍 *Search results for \"{query}\"*",
                "🔍 *\"{query}\" साठी शोध परिणाम*",
                "🔍 *\"{query}\" के लिए खोज परिणाम*",
            ],
            MessageId::NoSchemesForQuery => [
                "❌ No schemes found for \"{query}\"",
                "❌ \"{query}\" साठी कोणत्याही योजना सापडल्या नाहीत",
                "❌ \"{query}\" के लिए कोई योजना नहीं मिली",
            ],
            MessageId::SchemeAgePrompt => [
                "👤 *Schemes for me*\n\nPlease enter your age:",
                "👤 *माझ्यासाठी योजना*\n\nकृपया तुमचे वय प्रविष्ट करा:",
                "👤 *मेरे लिए योजनाएं*\n\nकृपया अपनी उम्र दर्ज करें:",
            ],
            MessageId::SchemeGenderPrompt => [
                "Select your gender:\n\n1️⃣ Male\n2️⃣ Female\n3️⃣ Other",
                "तुमचे लिंग निवडा:\n\n1️⃣ पुरुष\n2️⃣ स्त्री\n3️⃣ इतर",
                "अपना लिंग चुनें:\n\n1️⃣ पुरुष\n2️⃣ महिला\n3️⃣ अन्य",
            ],
            MessageId::SchemeCategoryPrompt => [
                "Select your category:\n\n1️⃣ General\n2️⃣ OBC\n3️⃣ SC\n4️⃣ ST",
                "तुमचा प्रवर्ग निवडा:\n\n1️⃣ सर्वसाधारण\n2️⃣ ओबीसी\n3️⃣ अनुसूचित जाती\n4️⃣ अनुसूचित जमाती",
                "अपनी श्रेणी चुनें:\n\n1️⃣ सामान्य\n2️⃣ ओबीसी\n3️⃣ अनुसूचित जाति\n4️⃣ अनुसूचित जनजाति",
            ],
            MessageId::SchemesForProfileHeader => [
                "👤 *Recommended for you*\n\nPlease check eligibility for each scheme:",
                "👤 *तुमच्यासाठी शिफारसी*\n\nकृपया प्रत्येक योजनेसाठी पात्रता तपासा:",
                "👤 *आपके लिए सिफारिशें*\n\nकृपया प्रत्येक योजना के लिए पात्रता जांचें:",
            ],
            MessageId::HowToApply => [
                "📝 *How to Apply for Schemes*\n\n1️⃣ Check eligibility in the scheme details\n2️⃣ Prepare documents (Aadhar, income certificate, etc.)\n3️⃣ Visit our office or apply online\n4️⃣ Submit the completed form\n5️⃣ Follow up on your application\n\n💡 Keep photocopies of all documents",
                "📝 *योजनांसाठी अर्ज कसा करावा*\n\n1️⃣ योजनेच्या तपशीलात पात्रता तपासा\n2️⃣ कागदपत्रे तयार करा (आधार, उत्पन्न प्रमाणपत्र इ.)\n3️⃣ कार्यालयात भेट द्या किंवा ऑनलाइन अर्ज करा\n4️⃣ पूर्ण भरलेला अर्ज सादर करा\n5️⃣ अर्जाचा पाठपुरावा करा\n\n💡 सर्व कागदपत्रांच्या फोटोकॉपी ठेवा",
                "📝 *योजनाओं के लिए आवेदन कैसे करें*\n\n1️⃣ योजना विवरण में पात्रता जांचें\n2️⃣ दस्तावेज़ तैयार करें (आधार, आय प्रमाण पत्र आदि)\n3️⃣ कार्यालय जाएं या ऑनलाइन आवेदन करें\n4️⃣ पूरा भरा फॉर्म जमा करें\n5️⃣ आवेदन का फॉलो अप करें\n\n💡 सभी दस्तावेज़ों की फोटोकॉपी रखें",
            ],
            MessageId::VoterSearchPrompt => [
                "🔍 *Search Voter*\n\nEnter name, mobile number, or voter ID:",
                "🔍 *मतदार शोधा*\n\nनाव, मोबाइल नंबर किंवा मतदार आयडी प्रविष्ट करा:",
                "🔍 *मतदाता खोजें*\n\nनाम, मोबाइल नंबर या मतदाता ID दर्ज करें:",
            ],
            MessageId::NoVotersFound => [
                "❌ No voters found. Please try again with a different search term.",
                "❌ कोणतेही मतदार सापडले नाहीत. कृपया वेगळ्या शोध शब्दासह पुन्हा प्रयत्न करा.",
                "❌ कोई मतदाता नहीं मिला। कृपया किसी अन्य खोज शब्द के साथ पुनः प्रयास करें।",
            ],
            MessageId::VoterResultsHeader => [
                "✅ *Found {count} voter(s)*\n\n",
                "✅ *{count} मतदार सापडले*\n\n",
                "✅ *{count} मतदाता मिले*\n\n",
            ],
            MessageId::VoterItem => [
                "{index}. *{name}*\n   Card: {card}\n   Age: {age}, Ward: {ward}\n   Booth: {booth}\n\n",
                "{index}. *{name}*\n   कार्ड: {card}\n   वय: {age}, प्रभाग: {ward}\n   बूथ: {booth}\n\n",
                "{index}. *{name}*\n   कार्ड: {card}\n   उम्र: {age}, वार्ड: {ward}\n   बूथ: {booth}\n\n",
            ],
            MessageId::EventsHeader => [
                "🎉 *Events* ({count})\n\n",
                "🎉 *कार्यक्रम* ({count})\n\n",
                "🎉 *कार्यक्रम* ({count})\n\n",
            ],
            MessageId::NoEvents => [
                "No events found.",
                "कोणतेही कार्यक्रम सापडले नाहीत.",
                "कोई कार्यक्रम नहीं मिले।",
            ],
            MessageId::EventGallery => [
                "📸 Event gallery coming soon!",
                "📸 इव्हेंट गॅलरी लवकरच!",
                "📸 इवेंट गैलरी जल्द!",
            ],
            MessageId::WorksHeader => [
                "🏗️ *Development Works* ({count})\n\n",
                "🏗️ *विकास कामे* ({count})\n\n",
                "🏗️ *विकास कार्य* ({count})\n\n",
            ],
            MessageId::NoWorks => [
                "No works found.",
                "कोणतीही कामे सापडली नाहीत.",
                "कोई कार्य नहीं मिला।",
            ],
            MessageId::WorkItem => [
                "{index}. *{title}*\n   Status: {status}\n   Budget: ₹{budget}\n\n",
                "{index}. *{title}*\n   स्थिती: {status}\n   अंदाजपत्रक: ₹{budget}\n\n",
                "{index}. *{title}*\n   स्थिति: {status}\n   बजट: ₹{budget}\n\n",
            ],
            MessageId::ImprovementsHeader => [
                "🏗️ *Possible Improvements* ({count})\n\n",
                "🏗️ *संभाव्य सुधारणा* ({count})\n\n",
                "🏗️ *संभावित सुधार* ({count})\n\n",
            ],
            MessageId::NoImprovements => [
                "No improvements found.",
                "कोणत्याही सुधारणा सापडल्या नाहीत.",
                "कोई सुधार नहीं मिला।",
            ],
            MessageId::AreaProblemDescriptionPrompt => [
                "📝 *Report Area Problem*\n\nPlease describe the problem in your area:",
                "📝 *प्रभाग समस्या नोंदवा*\n\nकृपया तुमच्या परिसरातील समस्येचे वर्णन करा:",
                "📝 *क्षेत्र की समस्या दर्ज करें*\n\nकृपया अपने क्षेत्र की समस्या का विवरण दें:",
            ],
            MessageId::AreaProblemLocationPrompt => [
                "📍 Please enter the exact location or landmark:",
                "📍 कृपया नेमके ठिकाण किंवा खूण प्रविष्ट करा:",
                "📍 कृपया सटीक स्थान या पहचान चिह्न दर्ज करें:",
            ],
            MessageId::AreaProblemReported => [
                "✅ *Problem reported!*\n\nReference: #{id}\nOur team will look into it.",
                "✅ *समस्या नोंदवली!*\n\nसंदर्भ क्रमांक: #{id}\nआमची टीम याची पाहणी करेल.",
                "✅ *समस्या दर्ज हुई!*\n\nसंदर्भ: #{id}\nहमारी टीम इसकी जांच करेगी।",
            ],
            MessageId::AreaProblemsHeader => [
                "📍 *Area Problems* ({count})\n\n",
                "📍 *प्रभाग समस्या* ({count})\n\n",
                "📍 *क्षेत्र की समस्याएं* ({count})\n\n",
            ],
            MessageId::NoAreaProblems => [
                "No problems found.",
                "कोणत्याही समस्या सापडल्या नाहीत.",
                "कोई समस्या नहीं मिली।",
            ],
            MessageId::ContactAddress => [
                "🏢 *Office Address*\n\n{value}",
                "🏢 *कार्यालय पत्ता*\n\n{value}",
                "🏢 *कार्यालय पता*\n\n{value}",
            ],
            MessageId::ContactHours => [
                "⏰ *Office Hours*\n\n{value}",
                "⏰ *कार्यालय वेळ*\n\n{value}",
                "⏰ *कार्यालय समय*\n\n{value}",
            ],
            MessageId::ContactPhone => [
                "📞 *Contact Numbers*\n\nOffice: {office}\nMobile: {mobile}",
                "📞 *संपर्क क्रमांक*\n\nकार्यालय: {office}\nमोबाइल: {mobile}",
                "📞 *संपर्क नंबर*\n\nकार्यालय: {office}\nमोबाइल: {mobile}",
            ],
            MessageId::ContactEmail => [
                "📧 *Email Address*\n\n{value}",
                "📧 *ईमेल पत्ता*\n\n{value}",
                "📧 *ईमेल पता*\n\n{value}",
            ],
            MessageId::ContactSocial => [
                "📱 *Follow Us*\n\n{value}",
                "📱 *आम्हाला फॉलो करा*\n\n{value}",
                "📱 *हमें फॉलो करें*\n\n{value}",
            ],
            MessageId::DefaultOfficeAddress => [
                "Corporator's Office, Ward Office premises",
                "नगरसेवक कार्यालय, प्रभाग कार्यालय परिसर",
                "नगरसेवक कार्यालय, वार्ड कार्यालय परिसर",
            ],
            MessageId::DefaultOfficeHours => [
                "Monday - Friday: 10:00 AM - 5:00 PM\nSaturday: 10:00 AM - 2:00 PM\nSunday: Closed",
                "सोमवार - शुक्रवार: सकाळी 10:00 - संध्याकाळी 5:00\nशनिवार: सकाळी 10:00 - दुपारी 2:00\nरविवार: बंद",
                "सोमवार - शुक्रवार: सुबह 10:00 - शाम 5:00\nशनिवार: सुबह 10:00 - दोपहर 2:00\nरविवार: बंद",
            ],
            MessageId::NotAvailable => ["Not available", "उपलब्ध नाही", "उपलब्ध नहीं"],
            MessageId::LetterTypesHeader => [
                "📄 *Select Letter Type*\n\n",
                "📄 *पत्राचा प्रकार निवडा*\n\n",
                "📄 *पत्र का प्रकार चुनें*\n\n",
            ],
            MessageId::NoLetterTypes => [
                "No letter types are available right now.",
                "सध्या कोणतेही पत्र प्रकार उपलब्ध नाहीत.",
                "अभी कोई पत्र प्रकार उपलब्ध नहीं है।",
            ],
            MessageId::LetterNamePrompt => [
                "You selected: *{kind}*\n\nPlease enter your *full name* for the letter:",
                "तुम्ही निवडले: *{kind}*\n\nपत्रासाठी तुमचे *पूर्ण नाव* प्रविष्ट करा:",
                "आपने चुना: *{kind}*\n\nपत्र के लिए अपना *पूरा नाम* दर्ज करें:",
            ],
            MessageId::LetterMobilePrompt => [
                "📱 Please enter your *10-digit mobile number*:",
                "📱 कृपया तुमचा *१० अंकी मोबाइल नंबर* प्रविष्ट करा:",
                "📱 कृपया अपना *10 अंकों का मोबाइल नंबर* दर्ज करें:",
            ],
            MessageId::LetterAddressPrompt => [
                "🏠 Please enter your *address*:",
                "🏠 कृपया तुमचा *पत्ता* प्रविष्ट करा:",
                "🏠 कृपया अपना *पता* दर्ज करें:",
            ],
            MessageId::LetterPurposePrompt => [
                "🎯 What is the *purpose* of this letter?",
                "🎯 या पत्राचा *उद्देश* काय आहे?",
                "🎯 इस पत्र का *उद्देश्य* क्या है?",
            ],
            MessageId::LetterRequested => [
                "✅ *Request submitted!*\n\nYour request for a *{kind}* has been received.\nReference: #{id}\nWe will notify you once it is approved.",
                "✅ *विनंती सादर!*\n\nतुमची *{kind}* साठीची विनंती मिळाली आहे.\nसंदर्भ क्रमांक: #{id}\nमंजुरीनंतर आम्ही कळवू.",
                "✅ *अनुरोध जमा!*\n\nआपका *{kind}* का अनुरोध प्राप्त हुआ है।\nसंदर्भ: #{id}\nस्वीकृति के बाद हम सूचित करेंगे।",
            ],
            MessageId::PersonalNamePrompt => [
                "🆘 *Personal Request*\n\nPlease enter your *full name*:",
                "🆘 *वैयक्तिक विनंती*\n\nकृपया तुमचे *पूर्ण नाव* प्रविष्ट करा:",
                "🆘 *व्यक्तिगत अनुरोध*\n\nकृपया अपना *पूरा नाम* दर्ज करें:",
            ],
            MessageId::PersonalMobilePrompt => [
                "📱 Please enter your *10-digit mobile number*:",
                "📱 कृपया तुमचा *१० अंकी मोबाइल नंबर* प्रविष्ट करा:",
                "📱 कृपया अपना *10 अंकों का मोबाइल नंबर* दर्ज करें:",
            ],
            MessageId::PersonalDescriptionPrompt => [
                "✍️ Please tell us briefly how we can help you:",
                "✍️ आम्ही तुम्हाला कशी मदत करू शकतो ते थोडक्यात सांगा:",
                "✍️ कृपया संक्षेप में बताएं कि हम आपकी कैसे मदद कर सकते हैं:",
            ],
            MessageId::PersonalRequestReceived => [
                "✅ *Request received!*\n\nReference: #{id}\nOur team will contact you personally.",
                "✅ *विनंती मिळाली!*\n\nसंदर्भ क्रमांक: #{id}\nआमची टीम तुमच्याशी वैयक्तिक संपर्क करेल.",
                "✅ *अनुरोध प्राप्त हुआ!*\n\nसंदर्भ: #{id}\nहमारी टीम आपसे व्यक्तिगत रूप से संपर्क करेगी।",
            ],
            MessageId::MeetingDiary => [
                "📅 *Meeting Diary*\n\nUpcoming meetings and minutes are available on the website.",
                "📅 *मीटिंग डायरी*\n\nआगामी सभा आणि कार्यवृत्त वेबसाइटवर उपलब्ध आहेत.",
                "📅 *मीटिंग डायरी*\n\nआगामी बैठकें और कार्यवृत्त वेबसाइट पर उपलब्ध हैं।",
            ],
            MessageId::PhotoGallery => [
                "📸 *Photo Gallery*\n\nView photos of events and development works on our website.",
                "📸 *फोटो गॅलरी*\n\nआमच्या वेबसाइटवर कार्यक्रम आणि विकास कामांचे फोटो पहा.",
                "📸 *फोटो गैलरी*\n\nहमारी वेबसाइट पर कार्यक्रमों और विकास कार्यों की तस्वीरें देखें।",
            ],
            MessageId::WardBudget => [
                "💰 *Ward Budget*\n\nDetailed budget allocation and spending reports are available on the website.",
                "💰 *प्रभाग अर्थसंकल्प*\n\nतपशीलवार अर्थसंकल्प वाटप आणि खर्च अहवाल वेबसाइटवर उपलब्ध आहेत.",
                "💰 *वार्ड बजट*\n\nविस्तृत बजट आवंटन और खर्च रिपोर्ट वेबसाइट पर उपलब्ध हैं।",
            ],
            MessageId::NoActiveSurvey => [
                "📊 There is no survey running right now. Please check again later.",
                "📊 सध्या कोणतेही सर्वेक्षण सुरू नाही. कृपया नंतर पुन्हा पहा.",
                "📊 अभी कोई सर्वेक्षण नहीं चल रहा है। कृपया बाद में फिर देखें।",
            ],
            MessageId::SurveyIntro => [
                "📊 *Survey started*\n\n*{title}*\n\nPlease answer the following questions.\n\n_(Type \"SKIP\" to leave a question unanswered)_",
                "📊 *सर्वेक्षण सुरू*\n\n*{title}*\n\nकृपया खालील प्रश्नांची उत्तरे द्या.\n\n_(उत्तरे द्यायची नसल्यास \"SKIP\" टाइप करा)_",
                "📊 *सर्वेक्षण शुरू*\n\n*{title}*\n\nकृपया निम्नलिखित प्रश्नों के उत्तर दें।\n\n_(उत्तर न देना हो तो \"SKIP\" टाइप करें)_",
            ],
            MessageId::SurveyQuestionHeader => [
                "📋 *Question {number}/{total}*",
                "📋 *प्रश्न {number}/{total}*",
                "📋 *प्रश्न {number}/{total}*",
            ],
            MessageId::SurveyYesNoOptions => [
                "1️⃣ Yes\n2️⃣ No",
                "1️⃣ होय\n2️⃣ नाही",
                "1️⃣ हां\n2️⃣ नहीं",
            ],
            MessageId::SurveyRatingHint => [
                "⭐ Give a rating from 1 to 5",
                "⭐ 1 ते 5 मधील रेटिंग द्या",
                "⭐ 1 से 5 के बीच रेटिंग दें",
            ],
            MessageId::SurveyTextHint => [
                "✏️ Type your answer.",
                "✏️ तुमचे उत्तर टाइप करा.",
                "✏️ अपना उत्तर टाइप करें।",
            ],
            MessageId::SurveyInvalidYesNo => [
                "❌ Invalid answer. Type 1 (Yes) or 2 (No).",
                "❌ अवैध उत्तर. 1 (होय) किंवा 2 (नाही) टाइप करा.",
                "❌ अमान्य उत्तर। 1 (हां) या 2 (नहीं) टाइप करें।",
            ],
            MessageId::SurveyInvalidChoice => [
                "❌ Invalid answer. Please type a number from 1 to {count}.",
                "❌ अवैध उत्तर. कृपया 1 ते {count} मधील क्रमांक टाइप करा.",
                "❌ अमान्य उत्तर। कृपया 1 से {count} के बीच संख्या टाइप करें।",
            ],
            MessageId::SurveyInvalidRating => [
                "❌ Invalid answer. Type a rating from 1 to 5.",
                "❌ अवैध उत्तर. 1 ते 5 मधील रेटिंग टाइप करा.",
                "❌ अमान्य उत्तर। 1 से 5 के बीच रेटिंग टाइप करें।",
            ],
            MessageId::SurveyInvalidText => [
                "❌ Invalid answer. Please type your answer.",
                "❌ अवैध उत्तर. कृपया उत्तर टाइप करा.",
                "❌ अमान्य उत्तर। कृपया उत्तर टाइप करें।",
            ],
            MessageId::SurveyAnswerRecorded => [
                "✅ *Recorded:* {answer}",
                "✅ *नोंद झाली:* {answer}",
                "✅ *दर्ज हुआ:* {answer}",
            ],
            MessageId::SurveyYes => ["Yes", "होय", "हां"],
            MessageId::SurveyNo => ["No", "नाही", "नहीं"],
            MessageId::SurveyCompleted => [
                "✅ *Survey complete!*\n\nThank you for your valuable response! 🙏\nYour opinion matters a lot to us.",
                "✅ *सर्वेक्षण पूर्ण!*\n\nआपल्या मौल्यवान प्रतिसादाबद्दल धन्यवाद! 🙏\nआपले मत आमच्यासाठी खूप महत्त्वाचे आहे.",
                "✅ *सर्वेक्षण पूरा!*\n\nआपकी मूल्यवान प्रतिक्रिया के लिए धन्यवाद! 🙏\nआपकी राय हमारे लिए बहुत महत्वपूर्ण है।",
            ],
        }
    }
}

/// Built-in catalog compiled into the binary
#[derive(Debug, Default, Clone, Copy)]
pub struct StaticCatalog;

impl Catalog for StaticCatalog {
    fn menu(&self, id: MenuId, lang: Language) -> &str {
        id.texts()[lang.index()]
    }

    fn message(&self, id: MessageId, lang: Language) -> &str {
        id.texts()[lang.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_submenu_offers_navigation_tokens() {
        let menus = [
            MenuId::Complaints,
            MenuId::Schemes,
            MenuId::Voter,
            MenuId::Events,
            MenuId::Works,
            MenuId::AreaProblems,
            MenuId::Contact,
            MenuId::Other,
        ];
        for menu in menus {
            for lang in Language::ALL {
                let text = StaticCatalog.menu(menu, lang);
                assert!(text.contains("0️⃣"), "{menu:?}/{lang} lacks language token");
                assert!(text.contains("9️⃣"), "{menu:?}/{lang} lacks root token");
            }
        }
        assert!(StaticCatalog.menu(MenuId::Complaints, Language::English).ends_with(NAV_FOOTER_EN));
    }

    #[test]
    fn templates_keep_placeholders_in_every_language() {
        for lang in Language::ALL {
            assert!(StaticCatalog.message(MessageId::ComplaintRegistered, lang).contains("{id}"));
            assert!(StaticCatalog.message(MessageId::SchemeListHeader, lang).contains("{count}"));
            assert!(StaticCatalog.message(MessageId::LetterRequested, lang).contains("{kind}"));
            assert!(StaticCatalog.message(MessageId::SurveyIntro, lang).contains("{title}"));
            assert!(StaticCatalog.message(MessageId::SurveyInvalidChoice, lang).contains("{count}"));
            let header = StaticCatalog.message(MessageId::SurveyQuestionHeader, lang);
            assert!(header.contains("{number}") && header.contains("{total}"));
        }
    }
}
