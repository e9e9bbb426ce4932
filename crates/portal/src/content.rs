//! Marketing copy for the home page sections.
//!
//! Everything here is compiled in. Templates read it through [`SiteContent`],
//! and the FAQ also feeds the `FAQPage` structured data in [`crate::seo`].

/// A link in the navbar or footer.
#[derive(Debug, Clone, Copy)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Hero {
    pub eyebrow: &'static str,
    /// Rotated by the typing effect; the first one is rendered server-side.
    pub typed: &'static [&'static str],
    pub blurb: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Program {
    pub name: &'static str,
    pub tagline: &'static str,
    pub description: &'static str,
    pub highlights: &'static [&'static str],
}

/// A titled card: features, services, why-choose reasons.
#[derive(Debug, Clone, Copy)]
pub struct Card {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub quote: &'static str,
}

impl Testimonial {
    /// Initials for the avatar badge.
    #[must_use]
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .collect()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct ContactDetails {
    pub email: &'static str,
    pub phone: &'static str,
    pub address: &'static str,
}

impl ContactDetails {
    /// Phone number for a `tel:` link.
    #[must_use]
    pub fn phone_href(&self) -> String {
        self.phone.chars().filter(|c| *c == '+' || c.is_ascii_digit()).collect()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Founder {
    pub name: &'static str,
    pub title: &'static str,
    pub note: &'static [&'static str],
    pub call_to_action: &'static str,
    pub call_to_action_blurb: &'static str,
}

/// All copy for the marketing page.
#[derive(Debug, Clone, Copy)]
pub struct SiteContent {
    pub nav: &'static [NavLink],
    pub hero: Hero,
    pub features: &'static [Card],
    pub programs: &'static [Program],
    pub about_paragraphs: &'static [&'static str],
    pub about_points: &'static [&'static str],
    pub why_choose: &'static [Card],
    pub services: &'static [Card],
    pub testimonials: &'static [Testimonial],
    pub faqs: &'static [Faq],
    pub contact: ContactDetails,
    pub founder: Founder,
    pub footer_quick_links: &'static [NavLink],
    pub footer_programs: &'static [NavLink],
}

pub const SITE: SiteContent = SiteContent {
    nav: &[
        NavLink { label: "Home", href: "/#home" },
        NavLink { label: "Programs", href: "/#programs" },
        NavLink { label: "About", href: "/#about" },
        NavLink { label: "Services", href: "/#services" },
    ],
    hero: Hero {
        eyebrow: "Training Program",
        typed: &["Sankalp", "Transform Your Career", "Learn. Grow. Succeed."],
        blurb: "Join our comprehensive training program and master the skills that top tech \
                companies demand. Get hands-on experience, mentorship, and guaranteed placement \
                opportunities.",
    },
    features: &[
        Card {
            icon: "briefcase",
            title: "100% Placement",
            description: "Guaranteed placement assistance for all trainees, ensuring jobs in top \
                          tech companies.",
        },
        Card {
            icon: "wallet",
            title: "Paid Internship",
            description: "Every successful candidate secures a 100% paid internship with a stipend \
                          of up to ₹10,000.",
        },
        Card {
            icon: "users",
            title: "Expert Mentorship",
            description: "Get 1-on-1 mentorship from experienced professionals in the tech industry.",
        },
        Card {
            icon: "code",
            title: "Real-World Projects",
            description: "Work on industry-relevant projects to build a strong portfolio and gain \
                          practical experience.",
        },
    ],
    programs: &[
        Program {
            name: "Undergraduate Program",
            tagline: "Crack Top Tech Companies",
            description: "For students looking to secure placements in top-tier companies, our \
                          Undergraduate Training Program is designed to build a strong foundation \
                          in coding, problem-solving, and real-world application development.",
            highlights: &[
                "Expert mentorship from industry professionals",
                "Real-world projects to build your portfolio",
                "Comprehensive interview preparation",
                "Placement assistance in leading MNCs and startups",
            ],
        },
        Program {
            name: "Career Transition Program",
            tagline: "Shift to Tech Roles",
            description: "If you're a working professional from a non-tech background and want to \
                          switch to a high-paying tech career, our Career Transition Program is for \
                          you.",
            highlights: &[
                "Learn Full Stack Development, AI, App Development",
                "Structured, hands-on learning approach",
                "Industry-recognized skills certification",
                "Career counseling and job placement support",
            ],
        },
    ],
    about_paragraphs: &[
        "At SpectoV Pvt Ltd, we are committed to creating an environment that fosters innovation, \
         learning, and professional growth. Our training programs are designed to bridge the gap \
         between academic learning and industry requirements.",
        "We ensure our interns are well-prepared to tackle real-world challenges and succeed in \
         their tech careers. Our focus is on practical skills, industry exposure, and career \
         development.",
    ],
    about_points: &[
        "Industry-Aligned",
        "Hands-on Learning",
        "Collaborative Environment",
        "Global Opportunities",
    ],
    why_choose: &[
        Card {
            icon: "award",
            title: "100% Placement & Paid Internship",
            description: "We guarantee 100% placement assistance and a paid internship with a \
                          stipend of up to ₹10,000. Our program ensures you gain real-world \
                          experience and become industry-ready while earning from day one.",
        },
        Card {
            icon: "code",
            title: "Industry-Aligned Training & Real-World Projects",
            description: "Our curriculum is designed by top industry experts and includes live \
                          projects, hackathons, and hands-on coding challenges. This ensures you \
                          develop practical skills that employers look for in the tech industry.",
        },
        Card {
            icon: "users",
            title: "Personalized Mentorship & Interview Preparation",
            description: "Get 1-on-1 mentorship from experienced professionals, resume-building \
                          support, and mock interviews to crack top FAANG and MNC job interviews \
                          with confidence.",
        },
        Card {
            icon: "briefcase",
            title: "Career Support for Students & Professionals",
            description: "Whether you're an undergraduate looking to land a top job or a \
                          professional wanting to shift to a tech career, we have customized \
                          training paths to help you succeed in your career transition.",
        },
    ],
    services: &[
        Card {
            icon: "glasses",
            title: "AR/VR",
            description: "Pioneering the future with cutting-edge AR and VR technologies. Our \
                          experts create immersive experiences that blend the physical and digital \
                          worlds.",
        },
        Card {
            icon: "trophy",
            title: "Competitive Programming",
            description: "Our focus on Data Structures and Algorithms ensures that our solutions are \
                          optimized for efficiency and performance, crucial for developing \
                          high-performance applications.",
        },
        Card {
            icon: "smartphone",
            title: "App Development",
            description: "Our App Development team is dedicated to creating user-friendly and \
                          high-performing mobile and web applications using the latest \
                          technologies and best practices.",
        },
        Card {
            icon: "layers",
            title: "Full Stack Development",
            description: "Our Full Stack Development team excels in creating robust and scalable \
                          web applications with expertise in both front-end and back-end \
                          technologies.",
        },
        Card {
            icon: "git-branch",
            title: "Data Structures & Algorithms",
            description: "We employ advanced DSA techniques to solve complex problems, enabling \
                          faster processing and more effective resource management for \
                          high-performance applications.",
        },
        Card {
            icon: "cpu",
            title: "Artificial Intelligence",
            description: "We leverage the power of AI to transform data into actionable insights, \
                          developing intelligent systems that automate processes and enhance \
                          decision-making.",
        },
    ],
    testimonials: &[
        Testimonial {
            name: "Priya Sharma",
            role: "Software Engineer at Google",
            quote: "The training program at SpectoV completely transformed my career. The \
                    mentorship and hands-on projects helped me land my dream job at Google.",
        },
        Testimonial {
            name: "Rahul Verma",
            role: "Full Stack Developer at Microsoft",
            quote: "The practical approach to learning and industry-focused curriculum made all \
                    the difference. I'm now working at Microsoft, thanks to SpectoV!",
        },
        Testimonial {
            name: "Aisha Patel",
            role: "Frontend Developer at Amazon",
            quote: "The mentors at SpectoV are exceptional. Their guidance and support helped me \
                    transition from a non-tech background to a developer role at Amazon.",
        },
    ],
    faqs: &[
        Faq {
            question: "What is the duration of the training program?",
            answer: "Our training program typically runs for 12 weeks, with flexible timing \
                     options available for working professionals.",
        },
        Faq {
            question: "Is there a guaranteed placement after completion?",
            answer: "Yes, we offer 100% placement assistance and guarantee job opportunities with \
                     our partner companies upon successful completion of the program.",
        },
        Faq {
            question: "What is the eligibility criteria?",
            answer: "The program is open to both students and working professionals. Basic \
                     programming knowledge and a strong willingness to learn are the main \
                     requirements.",
        },
        Faq {
            question: "How much is the program fee?",
            answer: "Program fees vary based on the course selected. We offer flexible payment \
                     options and EMI facilities. Contact our counselors for detailed information.",
        },
        Faq {
            question: "Do you provide internship opportunities?",
            answer: "Yes, we provide paid internship opportunities with a stipend of up to \
                     ₹10,000 during the training period.",
        },
    ],
    contact: ContactDetails {
        email: "info@spectov.com",
        phone: "+91 98765 43210",
        address: "SpectoV Headquarters, Tech Park, Bangalore, India",
    },
    founder: Founder {
        name: "Vanshmani Jha",
        title: "Founder & CEO, SpectoV",
        note: &[
            "Sankalp Training Program empowers you with industry-ready skills and real-world \
             experience. Our focused curriculum, expert mentors, and hands-on projects ensure you \
             are prepared for top roles at leading global companies.",
            "We offer personalized guidance, practical training, and guaranteed placement support. \
             Join Sankalp to accelerate your tech career and achieve your professional goals.",
        ],
        call_to_action: "Join Sankalp",
        call_to_action_blurb: "Advance your career with proven training and placement support.",
    },
    footer_quick_links: &[
        NavLink { label: "Home", href: "/#home" },
        NavLink { label: "Programs", href: "/#programs" },
        NavLink { label: "About Us", href: "/#about" },
        NavLink { label: "Services", href: "/#services" },
        NavLink { label: "Contact", href: "/#contact" },
    ],
    footer_programs: &[
        NavLink { label: "Undergraduate Program", href: "/#programs" },
        NavLink { label: "Career Transition", href: "/#programs" },
        NavLink { label: "Paid Internships", href: "/#features" },
        NavLink { label: "Placement Assistance", href: "/#why-choose" },
        NavLink { label: "Mentorship", href: "/#about" },
    ],
};
