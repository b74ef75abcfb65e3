pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
}

pub struct GalleryImage {
    pub src: &'static str,
    pub alt: &'static str,
    pub title: &'static str,
}

pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub struct ContactDetail {
    pub title: &'static str,
    pub content: &'static str,
}

pub const HIGHLIGHTS: [Feature; 3] = [
    Feature {
        title: "Advanced Propulsion",
        description: "Cutting-edge rocket engine technology with superior thrust-to-weight ratios and fuel efficiency.",
    },
    Feature {
        title: "Precision Engineering",
        description: "State-of-the-art manufacturing processes ensuring the highest quality and reliability standards.",
    },
    Feature {
        title: "Mission Success",
        description: "Proven track record of successful launches and space missions with 99.7% reliability rate.",
    },
];

pub const SERVICES: [Feature; 3] = [
    Feature {
        title: "Rocket Design",
        description: "Custom rocket design and development tailored to specific mission requirements and payload specifications.",
    },
    Feature {
        title: "Propulsion Systems",
        description: "Advanced propulsion technology development including liquid, solid, and hybrid rocket engines.",
    },
    Feature {
        title: "Mission Control",
        description: "Complete mission control systems with real-time monitoring and autonomous flight control capabilities.",
    },
];

pub const GALLERY: [GalleryImage; 6] = [
    GalleryImage {
        src: "https://images.unsplash.com/photo-1581833971358-2c8b550f87b3?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&h=600",
        alt: "Space technology control room with multiple monitors",
        title: "Mission Control Center",
    },
    GalleryImage {
        src: "https://images.unsplash.com/photo-1446776653964-20c1d3a81b06?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&h=600",
        alt: "Rocket launch with flames and smoke",
        title: "Rocket Launch",
    },
    GalleryImage {
        src: "https://images.unsplash.com/photo-1516849841032-87cbac4d88f7?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&h=600",
        alt: "Satellite orbiting Earth with solar panels extended",
        title: "Satellite Deployment",
    },
    GalleryImage {
        src: "https://images.unsplash.com/photo-1517976487492-5750f3195933?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&h=600",
        alt: "Rocket engine testing facility with advanced engineering equipment",
        title: "Engineering Facility",
    },
    GalleryImage {
        src: "https://images.unsplash.com/photo-1446776877081-d282a0f896e2?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&h=600",
        alt: "Earth from space with stunning blue atmosphere view",
        title: "Earth Orbit Mission",
    },
    GalleryImage {
        src: "https://images.unsplash.com/photo-1544197150-b99a580bb7a8?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&h=600",
        alt: "Rocket launch at night with bright flames illuminating the darkness",
        title: "Night Launch",
    },
];

pub const STATS: [Stat; 4] = [
    Stat { value: "247", label: "Successful Launches" },
    Stat { value: "99.7%", label: "Success Rate" },
    Stat { value: "15+", label: "Years Experience" },
    Stat { value: "150+", label: "Engineers" },
];

pub const CONTACT_DETAILS: [ContactDetail; 3] = [
    ContactDetail {
        title: "Headquarters",
        content: "123 Aerospace Blvd, Cape Canaveral, FL 32920",
    },
    ContactDetail {
        title: "Phone",
        content: "+1 (555) 123-SPACE",
    },
    ContactDetail {
        title: "Email",
        content: "contact@astrelliontech.com",
    },
];
