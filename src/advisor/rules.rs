//! The advisor's keyword rule list and response texts.
//!
//! Rules are a literal ordered list evaluated first-match-wins, so position
//! in [`RULES`] is a deliberate priority, not an alphabetical accident.
//! Keyword tests are substring containment on the lowercased message, not
//! tokenized word matches: "hi" fires inside "which", and that imprecision
//! is part of the contract. Matching is memoryless per message; no rule
//! consults prior turns.

use crate::models::AuthContext;

/// One entry of the cascade: a category name (for logging and tests), the
/// trigger keywords, and the responder. Responders receive the lowercased
/// input so they can run their own secondary keyword checks.
pub struct Rule {
    pub name: &'static str,
    pub keywords: &'static [&'static str],
    pub respond: fn(&str, &AuthContext) -> String,
}

impl Rule {
    pub fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|k| lowered.contains(k))
    }
}

/// The cascade, highest priority first.
pub const RULES: &[Rule] = &[
    Rule {
        name: "greeting",
        keywords: &["hello", "hi", "hey"],
        respond: greeting,
    },
    Rule {
        name: "courses",
        keywords: &["course", "subject", "stream"],
        respond: courses,
    },
    Rule {
        name: "colleges",
        keywords: &["college", "university", "admission"],
        respond: colleges,
    },
    Rule {
        name: "career",
        keywords: &["career", "job", "salary", "future"],
        respond: career,
    },
    Rule {
        name: "quiz",
        keywords: &["quiz", "test", "assessment", "aptitude"],
        respond: quiz,
    },
    Rule {
        name: "exams",
        keywords: &["exam", "jee", "neet", "entrance"],
        respond: exams,
    },
    Rule {
        name: "scholarships",
        keywords: &["scholarship", "financial aid", "fee", "money"],
        respond: scholarships,
    },
    Rule {
        name: "location",
        keywords: &["near me", "location", "city"],
        respond: location,
    },
    Rule {
        name: "navigation",
        keywords: &["how to", "navigate", "use", "help"],
        respond: navigation,
    },
    Rule {
        name: "encouragement",
        keywords: &["confused", "don't know", "help me choose", "lost"],
        respond: encouragement,
    },
];

/// Generic guidance pool for messages no rule claims; the engine picks one
/// uniformly at random.
pub const FALLBACK_RESPONSES: [&str; 3] = [
    "That's an interesting question! I specialize in educational guidance and can help you with:\n\n\
     • Course selection and career paths\n\
     • College recommendations and admissions\n\
     • Entrance exam information\n\
     • Scholarship opportunities\n\
     • Timeline planning\n\n\
     Could you tell me more about what specific aspect of your education you'd like to explore?",
    "I'd love to help you with that! As your educational advisor, I can assist with:\n\n\
     🎓 **Academic Planning** - Courses, streams, career mapping\n\
     🏛️ **College Selection** - Find the perfect fit for you\n\
     📊 **Assessments** - Discover your strengths and interests\n\
     📅 **Timeline Management** - Never miss important deadlines\n\n\
     What would you like to know more about?",
    "Great question! I'm here to guide you through your educational journey. Whether you're curious about:\n\n\
     • Different career options and their prospects\n\
     • Admission requirements and processes\n\
     • Scholarship and financial aid options\n\
     • Study tips and exam preparation\n\n\
     I'm here to help! What's on your mind?",
];

fn greeting(_input: &str, auth: &AuthContext) -> String {
    if auth.authenticated {
        format!(
            "Hello {}! Great to see you again. What would you like to explore today?",
            auth.name
        )
    } else {
        "Hello! Welcome to EduPath Advisor. I'm here to help you navigate your educational \
         journey. What can I assist you with?"
            .to_string()
    }
}

fn courses(input: &str, auth: &AuthContext) -> String {
    if input.contains("science") {
        return "Science stream offers exciting opportunities! 🔬 Popular courses include:\n\n\
                • B.Tech (Engineering) - Computer Science, Mechanical, Electrical\n\
                • MBBS (Medicine) - High competition, rewarding career\n\
                • B.Sc - Physics, Chemistry, Mathematics, Biology\n\
                • Pharmacy, Biotechnology, Environmental Science\n\n\
                Would you like detailed information about any specific course or career prospects?"
            .to_string();
    }
    if input.contains("commerce") {
        return "Commerce stream opens doors to business and finance! 💼 Top courses include:\n\n\
                • B.Com - Accounting, Finance, Economics\n\
                • BBA - Business Administration and Management\n\
                • CA/CPA - Chartered Accountancy (high earning potential)\n\
                • Economics, Statistics, Banking & Insurance\n\n\
                I can help you understand admission requirements and career paths. \
                What interests you most?"
            .to_string();
    }
    if input.contains("arts") || input.contains("humanities") {
        return "Arts/Humanities offers diverse creative and analytical paths! 🎨 Popular options:\n\n\
                • BA - Literature, History, Psychology, Sociology\n\
                • Mass Communication & Journalism\n\
                • Law (5-year integrated programs)\n\
                • Fine Arts, Design, Fashion Technology\n\
                • Social Work, Political Science\n\n\
                These fields offer great opportunities in media, government, NGOs, and creative \
                industries. Need specific guidance?"
            .to_string();
    }
    if auth.authenticated {
        "Based on your profile, I can suggest personalized courses! The main streams after 12th are:\n\n\
         🔬 **Science** - Engineering, Medicine, Research\n\
         💼 **Commerce** - Business, Finance, Accounting\n\
         🎨 **Arts** - Literature, Social Sciences, Creative fields\n\
         ⚡ **Vocational** - Skill-based, industry-ready programs\n\n\
         Take our aptitude quiz for personalized recommendations, or tell me about your interests!"
            .to_string()
    } else {
        "I can help you explore various courses! The main streams are Science, Commerce, Arts, \
         and Vocational. For personalized recommendations based on your interests and aptitude, \
         I suggest taking our quiz or logging in for a customized experience. What field \
         interests you most?"
            .to_string()
    }
}

fn colleges(input: &str, auth: &AuthContext) -> String {
    if input.contains("engineering") || input.contains("iit") || input.contains("nit") {
        return "Engineering colleges in India! 🏛️ Top options include:\n\n\
                **Government (Lower Fees):**\n\
                • IITs - Premium institutes, JEE Advanced required\n\
                • NITs - Excellent reputation, JEE Main cutoffs\n\
                • State Engineering Colleges\n\n\
                **Private (Higher Fees):**\n\
                • BITS Pilani, VIT, SRM, Manipal\n\
                • Good placement records\n\n\
                Admission through JEE Main/Advanced. Want help finding colleges in your area \
                or budget range?"
            .to_string();
    }
    if input.contains("medical") || input.contains("mbbs") || input.contains("neet") {
        return "Medical colleges require NEET qualification! 🏥\n\n\
                **Government Medical Colleges:**\n\
                • AIIMS - Top-tier, highly competitive\n\
                • State Medical Colleges - Lower fees\n\
                • JIPMER, PGIMER\n\n\
                **Private Medical Colleges:**\n\
                • Higher fees (₹50L+ for MBBS)\n\
                • Deemed universities\n\n\
                NEET score determines admission. Current cutoffs are very high. Would you like \
                preparation tips or college-specific information?"
            .to_string();
    }
    if auth.authenticated {
        "I can help you find colleges based on your preferences! Our database includes:\n\n\
         • 500+ colleges across India\n\
         • Filter by location, fees, courses\n\
         • Government vs Private options\n\
         • Hostel facilities and medium of instruction\n\n\
         Visit our Colleges page or tell me your specific requirements (location, budget, \
         course) for personalized suggestions!"
            .to_string()
    } else {
        "Our college directory has 500+ institutions! You can search by location, course, fees, \
         and facilities. For personalized college recommendations based on your profile and \
         preferences, please log in. What type of college are you looking for?"
            .to_string()
    }
}

fn career(_input: &str, auth: &AuthContext) -> String {
    if auth.authenticated {
        format!(
            "Career planning is crucial, {}! 🚀 Based on your interests, here are some \
             high-growth fields:\n\n\
             **Technology:** Software Development, Data Science, AI/ML, Cybersecurity\n\
             **Healthcare:** Medicine, Nursing, Physiotherapy, Medical Technology\n\
             **Business:** Digital Marketing, Finance, Consulting, Entrepreneurship\n\
             **Creative:** Design, Content Creation, Media, Entertainment\n\n\
             Take our career assessment quiz for detailed recommendations with salary insights \
             and growth prospects!",
            auth.name
        )
    } else {
        "Career planning is essential! 🎯 Popular high-growth careers include:\n\n\
         • Technology (Software, Data Science, AI)\n\
         • Healthcare (Medicine, Allied Health)\n\
         • Business & Finance\n\
         • Creative & Media fields\n\n\
         For personalized career recommendations based on your interests and aptitude, take \
         our quiz or log in for detailed guidance!"
            .to_string()
    }
}

fn quiz(_input: &str, _auth: &AuthContext) -> String {
    "Our aptitude quiz is designed to discover your strengths! 📊\n\n\
     **What it includes:**\n\
     • 15-20 questions covering different aptitudes\n\
     • Logical, creative, analytical, and practical scenarios\n\
     • Takes about 10-15 minutes\n\
     • Instant results with detailed analysis\n\n\
     **You'll get:**\n\
     • Recommended stream (Science/Commerce/Arts/Vocational)\n\
     • Matching percentage for each field\n\
     • Suggested career paths\n\
     • College recommendations\n\n\
     Ready to discover your ideal path? Click the \"Take Career Quiz\" button!"
        .to_string()
}

fn exams(_input: &str, _auth: &AuthContext) -> String {
    "Important entrance exams in India! 📚\n\n\
     **Engineering:**\n\
     • JEE Main (April & May) - For NITs, IIITs\n\
     • JEE Advanced (June) - For IITs\n\
     • State CETs - For state colleges\n\n\
     **Medical:**\n\
     • NEET UG (May) - For MBBS, BDS\n\
     • AIIMS, JIPMER (now through NEET)\n\n\
     **Other Fields:**\n\
     • CLAT (Law), CAT (MBA), GATE (M.Tech)\n\n\
     Check our Timeline page for exact dates and deadlines. Need preparation tips for any \
     specific exam?"
        .to_string()
}

fn scholarships(_input: &str, _auth: &AuthContext) -> String {
    "Scholarships can significantly reduce education costs! 💰\n\n\
     **Government Scholarships:**\n\
     • National Scholarship Portal (NSP)\n\
     • Merit-based and need-based options\n\
     • SC/ST/OBC specific schemes\n\
     • State government scholarships\n\n\
     **Private Scholarships:**\n\
     • Corporate CSR programs\n\
     • Educational foundations\n\
     • Merit-based awards\n\n\
     **Tips:**\n\
     • Apply early, maintain good grades\n\
     • Keep all documents ready\n\
     • Check eligibility criteria carefully\n\n\
     Visit our Timeline page for application deadlines!"
        .to_string()
}

fn location(_input: &str, _auth: &AuthContext) -> String {
    "Finding colleges near you! 📍\n\n\
     Our college directory includes:\n\
     • Interactive map view\n\
     • Distance-based search\n\
     • Local transportation info\n\
     • Hostel availability\n\n\
     Use our Colleges page with location filters, or tell me your city/state for specific \
     recommendations. You can also filter by:\n\
     • Course availability\n\
     • Fee range\n\
     • Government vs Private\n\
     • Medium of instruction"
        .to_string()
}

fn navigation(_input: &str, _auth: &AuthContext) -> String {
    "I'm here to help you navigate EduPath Advisor! 🧭\n\n\
     **Main Features:**\n\
     • **Quiz** - Discover your ideal stream\n\
     • **Courses** - Explore career paths with salary data\n\
     • **Colleges** - Find institutions with filters & map\n\
     • **Timeline** - Track important deadlines\n\
     • **Dashboard** - Your personalized recommendations\n\n\
     **Tips:**\n\
     • Start with the aptitude quiz\n\
     • Save colleges you're interested in\n\
     • Set deadline reminders\n\
     • Explore career growth charts\n\n\
     What would you like to explore first?"
        .to_string()
}

fn encouragement(_input: &str, auth: &AuthContext) -> String {
    if auth.authenticated {
        format!(
            "It's completely normal to feel confused about your future, {}! 🤗 Many students \
             go through this.\n\n\
             **Here's what I suggest:**\n\
             1. Take our aptitude quiz - it reveals hidden strengths\n\
             2. Explore different career paths and their day-to-day reality\n\
             3. Talk to professionals in fields that interest you\n\
             4. Consider your natural talents and what energizes you\n\n\
             **Remember:**\n\
             • There's no single \"right\" path\n\
             • You can always pivot and grow\n\
             • Your interests may evolve - that's okay!\n\n\
             Let's start with the quiz to give you some direction. You've got this! 💪",
            auth.name
        )
    } else {
        "Feeling confused about your future is completely normal! 🤗 Every successful person \
         has been where you are.\n\n\
         **Let's break it down:**\n\
         1. Start with our aptitude quiz to identify your strengths\n\
         2. Explore different career paths and their realities\n\
         3. Consider what activities make you lose track of time\n\
         4. Think about problems you'd love to solve\n\n\
         Remember, there's no single \"perfect\" path. The key is to start exploring and stay \
         curious. Ready to take the first step with our quiz?"
            .to_string()
    }
}
