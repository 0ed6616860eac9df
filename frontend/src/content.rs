// Copy and figures shown on the marketing pages.

pub struct Offer {
    pub title: &'static str,
    pub price: &'static str,
    pub description: &'static str,
    pub features: [&'static str; 3],
    pub includes: &'static str,
    pub excludes: &'static str,
    pub cta: &'static str,
    pub bestseller: bool,
}

pub const OFFERS: [Offer; 4] = [
    Offer {
        title: "48h-Consent-Check",
        price: "ab 500 €*",
        description: "CMP/Banner-Review (UX + Tech), Consent Mode v2 Diagnose & Sofort-Fix-Liste.",
        features: [
            "CMP/Banner-Review (UX + Tech)",
            "Consent Mode v2 Diagnose",
            "Sofort-Fix-Liste mit Priorität",
        ],
        includes: "Analyse · Prioritäten · Fahrplan",
        excludes: "Rechtsberatung",
        cta: "Check starten",
        bestseller: false,
    },
    Offer {
        title: "14-Tage Fix-Pilot",
        price: "ab 3.000 €*",
        description: "Banner- & CMv2-Implementierung / Reparatur, GA4 + Ads-Signals sauber verdrahtet.",
        features: [
            "Banner- & CMv2-Implementierung",
            "GA4 + Ads-Signals sauber verdrahtet",
            "Handover inkl. Change-Log",
        ],
        includes: "Umsetzung · QA-Proof · Handover",
        excludes: "Media-Optimierung, Rechtsberatung",
        cta: "Pilot planen",
        bestseller: true,
    },
    Offer {
        title: "Banner-A/B",
        price: "ab 1.500 €*",
        description: "Varianten & Copy-Tests für höhere Consent-Raten bei gleicher Signalqualität.",
        features: [
            "Varianten & Copy-Tests",
            "Consent-Rate vs. Signalqualität",
            "Gewinner-Setup live",
        ],
        includes: "2–3 Varianten · Test · Rollout",
        excludes: "Rechtsberatung",
        cta: "A/B Setup sehen",
        bestseller: false,
    },
    Offer {
        title: "Training",
        price: "ab 1.200 €*",
        description: "Team-Enablement für CMP/CMv2, Playbooks und QA-Rituale.",
        features: [
            "Team-Enablement für CMP/CMv2",
            "Best-Practice-Playbook",
            "QA-Ritual & Monitoring",
        ],
        includes: "Workshop · Playbook · Q&A",
        excludes: "Rechtsberatung",
        cta: "Training anfragen",
        bestseller: false,
    },
];

pub const FAQS: [(&str, &str); 10] = [
    ("Was bekomme ich genau am Ende?", "Einen dokumentierten Proof-Stack + klare Next-Steps, die dein Team versteht und weiter nutzt."),
    ("Welche CMPs unterstützt ihr?", "Alle gängigen CMPs im DACH-Markt. Wir prüfen, ob dein Setup export- und audit-fähig ist."),
    ("Basic oder Advanced Consent Mode v2?", "Basic ist Startlinie. Advanced lohnt sich, wenn Ads/GA4-Signals strategisch wichtig sind."),
    ("Wie schnell sehen wir Effekte?", "Technische Stabilität sofort; Modell-Verbesserungen zeigen sich je nach Traffic in Wochen."),
    ("Braucht ihr Zugriff auf alles?", "Minimal-Setup reicht: CMP, GTM/SSGTM, GA4, Ads-Konten. Wir klären das vorab."),
    ("Was ist mit „Alle ablehnen“?", "Muss gleichwertig sein. Wir bauen es so, dass UX und Recht zusammenpassen."),
    ("Könnt ihr Rechtsberatung geben?", "Nein, wir liefern technisch/organisatorisch saubere Umsetzung und Nachweise."),
    ("Was, wenn wir schon CMv2 eingebaut haben?", "Perfekt. Dann prüfen wir Signals, Timing und Vendor-Mapping und fixen die Lücken."),
    ("Wie läuft der Fix-Pilot ab?", "Kickoff → Diagnose → Umsetzung → QA-Proof → Handover. Ohne Projekt-Theater."),
    ("Was kostet das insgesamt?", "Abhängig von Stack und Umfang. Wir nennen vor Start einen fairen Korridor."),
];

pub struct ServicePillar {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub outcome: &'static str,
    pub features: [&'static str; 3],
    pub image: &'static str,
}

pub const SERVICE_PILLARS: [ServicePillar; 4] = [
    ServicePillar {
        icon: "⚙️",
        title: "Cookie-Banner & CMP-Modernisierung",
        description: "Gleichwertiges 'Alle ablehnen', saubere Vendor-Mappings, klare UX.",
        outcome: "Banner, das Nutzer akzeptieren und Juristen nicht hassen.",
        features: [
            "Banner, das Nutzer akzeptieren und Juristen nicht hassen.",
            "Saubere Vendor-Mappings.",
            "Klare UX Umsetzung.",
        ],
        image: "https://images.unsplash.com/photo-1614728853913-1e2386691901?q=80&w=1000&auto=format&fit=crop",
    },
    ServicePillar {
        icon: "🗄️",
        title: "Consent Mode v2 (Basic/Advanced)",
        description: "Richtige Signals, richtiges Timing, richtiges Gating.",
        outcome: "Modellierung funktioniert, ohne Dunkel-Optimierung.",
        features: [
            "Modellierung funktioniert, ohne Blindflug.",
            "Richtiges Timing der Tags.",
            "Korrektes Gating.",
        ],
        image: "https://images.unsplash.com/photo-1550751827-4bd374c3f58b?q=80&w=1000&auto=format&fit=crop",
    },
    ServicePillar {
        icon: "🖥️",
        title: "Server-Side Tagging & GTM-Gating",
        description: "Tracking stabilisieren, Datenflüsse kontrollieren, weniger Pixel-Chaos.",
        outcome: "Mehr Datenqualität trotz Browser-Limits.",
        features: [
            "Mehr Datenqualität.",
            "Weniger Ausfall durch Browser-Limits.",
            "Kontrollierte Datenflüsse.",
        ],
        image: "https://images.unsplash.com/photo-1544197150-b99a580bb7a8?q=80&w=1000&auto=format&fit=crop",
    },
    ServicePillar {
        icon: "📋",
        title: "DPA/AV-Audit & Proof-Stack",
        description: "Technische/organisatorische Prüfung + Nachweise für deine Akte.",
        outcome: "Sauber dokumentiert für Kunden, Anwälte, Auditoren.",
        features: [
            "Saubere Dokumentation für Kunden.",
            "Nachweise für Anwälte & Auditoren.",
            "Technische Prüfung.",
        ],
        image: "https://images.unsplash.com/photo-1642543492481-44e81e3914a7?q=80&w=1000&auto=format&fit=crop",
    },
];

pub struct Milestone {
    pub year: &'static str,
    pub title: &'static str,
    pub region: &'static str,
    pub description: &'static str,
}

pub const TIMELINE: [Milestone; 8] = [
    Milestone {
        year: "2018",
        title: "DSGVO / GDPR",
        region: "EU",
        description: "Datenschutz-Grundverordnung. Der globale Goldstandard, der die Rechte der Nutzer in den Mittelpunkt stellt.",
    },
    Milestone {
        year: "2018",
        title: "CCPA",
        region: "USA (Kalifornien)",
        description: "California Consumer Privacy Act. Das erste umfassende Datenschutzgesetz in den USA.",
    },
    Milestone {
        year: "2019",
        title: "LGPD",
        region: "Brasilien",
        description: "Lei Geral de Proteção de Dados. Stark an der europäischen DSGVO orientiert.",
    },
    Milestone {
        year: "2020",
        title: "CCPA (Inkrafttretung)",
        region: "USA (Kalifornien)",
        description: "Beginn der behördlichen Durchsetzung und erste Bußgelder.",
    },
    Milestone {
        year: "2021",
        title: "PIPL",
        region: "China",
        description: "Personal Information Protection Law. Strenge Regeln für Datentransfers aus China heraus.",
    },
    Milestone {
        year: "2023",
        title: "CPRA",
        region: "USA (Kalifornien)",
        description: "Erweiterung des CCPA. Führt neue Rechte ein und schafft eine eigene Schutzbehörde.",
    },
    Milestone {
        year: "2023",
        title: "VCDPA & CPA",
        region: "USA (VA & CO)",
        description: "Virginia und Colorado folgen mit eigenen Datenschutzgesetzen.",
    },
    Milestone {
        year: "2024",
        title: "Digital Markets Act",
        region: "EU",
        description: "Gatekeeper müssen Einwilligungen nachweisbar einholen, Consent Mode v2 wird Pflicht für Werbetreibende.",
    },
];

/// Share of breach costs in percent, with bar colour.
pub const BREACH_COSTS: [(&str, u32, (u8, u8, u8)); 5] = [
    ("Notfallreaktion", 28, (0x6A, 0x0D, 0xAD)),
    ("Geschäftsunterbrechung", 27, (0xFF, 0x4F, 0xA2)),
    ("Benachrichtigung", 18, (0xD9, 0xD9, 0xDE)),
    ("Wiederherstellung", 16, (0xD9, 0xD9, 0xDE)),
    ("Rechtliche Kosten", 11, (0xD9, 0xD9, 0xDE)),
];

pub struct KeyMetric {
    pub label: &'static str,
    pub value: &'static str,
    pub source: &'static str,
}

pub const KEY_METRICS: [KeyMetric; 3] = [
    KeyMetric {
        label: "Durchschnittliche Gesamtkosten",
        value: "4,44 Mio. €",
        source: "Globaler Durchschnittswert laut IBM Cost of a Data Breach Report (2023).",
    },
    KeyMetric {
        label: "Kosten pro Datensatz",
        value: "191 €",
        source: "Durchschnittskosten pro kompromittiertem Datensatz inkl. Forensik & Benachrichtigung.",
    },
    KeyMetric {
        label: "Churn-Risiko",
        value: "bis zu 5 %",
        source: "Prognostizierte Kundenabwanderung nach Bekanntwerden einer Datenschutzverletzung.",
    },
];

pub struct CaseStudy {
    pub company: &'static str,
    pub country: &'static str,
    pub fine: &'static str,
    pub violation: &'static str,
    pub impact: &'static str,
}

pub const DACH_CASES: [CaseStudy; 3] = [
    CaseStudy {
        company: "Deutsche Telekom",
        country: "Deutschland",
        fine: "€55 Million",
        violation: "Unzureichende Sicherheitsmaßnahmen",
        impact: "-€500M Umsatzverlust",
    },
    CaseStudy {
        company: "OMV Petrom",
        country: "Österreich",
        fine: "€18 Million",
        violation: "Datenschutzverletzung",
        impact: "-€120M Geschäftsunterbrechung",
    },
    CaseStudy {
        company: "Migros",
        country: "Schweiz",
        fine: "€12.7 Million",
        violation: "Mangelhafter Datenschutz",
        impact: "-€80M Kundenvertrauen",
    },
];

pub struct DesignExample {
    pub label: &'static str,
    pub prompt: &'static str,
    pub image: &'static str,
}

pub const DESIGN_EXAMPLES: [DesignExample; 4] = [
    DesignExample {
        label: "Dark Mode Banner",
        prompt: "A dark mode UI mockup of a consent banner with violet and pink accents, modern aesthetic, clean typography, high fidelity",
        image: "https://images.unsplash.com/photo-1611162617474-5b21e879e113?q=80&w=800&auto=format&fit=crop",
    },
    DesignExample {
        label: "A/B Testing Concept",
        prompt: "Visually striking image representing A/B testing for banners, split screen composition, contrasting neon colors, digital abstract style",
        image: "https://images.unsplash.com/photo-1550751827-4bd374c3f58b?q=80&w=800&auto=format&fit=crop",
    },
    DesignExample {
        label: "Performance Analytics",
        prompt: "Illustration of banner performance analytics with clear charts, glowing data lines, dark background, violet dashboard view",
        image: "https://images.unsplash.com/photo-1551288049-bebda4e38f71?q=80&w=800&auto=format&fit=crop",
    },
    DesignExample {
        label: "GDPR UX Concept",
        prompt: "Minimalist GDPR consent flow concept, equal weight accept and reject buttons, soft gradients, trustworthy UX",
        image: "https://images.unsplash.com/photo-1633265486064-084b5f994028?q=80&w=800&auto=format&fit=crop",
    },
];
