//! Compiled-in curriculum: HSC Std 12, Maharashtra State Board, English medium

/// A subject and its chapter titles in syllabus order
#[derive(Debug, Clone, Copy)]
pub struct CatalogSubject {
    /// Subject title
    pub title: &'static str,
    /// Chapter titles; position + 1 is the chapter number
    pub chapters: &'static [&'static str],
}

/// The seeded catalog
pub const CATALOG: &[CatalogSubject] = &[
    CatalogSubject {
        title: "Economics",
        chapters: &[
            "Introduction to Micro and Macro Economics",
            "Utility Analysis",
            "Demand Analysis",
            "Elasticity of Demand",
            "Production: Law of Variable Proportions and Returns to Scale",
            "Cost and Revenue Analysis",
            "Perfect Competition and Monopoly",
            "Monopolistic Competition and Oligopoly",
            "Index Numbers",
            "National Income",
            "Public Finance",
            "Money Market and Capital Market",
            "Foreign Trade",
        ],
    },
    CatalogSubject {
        title: "Book-keeping & Accountancy",
        chapters: &[
            "Introduction to Partnership Final Accounts",
            "Admission of Partner",
            "Retirement and Death of a Partner",
            "Dissolution of Partnership Firm",
            "Bills of Exchange",
            "Reconstitution of Partnership – Change in Profit-Sharing Ratio",
            "Single Entry System (Conversion Method)",
            "Consignment Accounts",
            "Joint Venture Accounts",
            "Accounting for Shares – Issue, Forfeiture and Reissue",
            "Company Final Accounts",
            "Analysis of Financial Statements",
        ],
    },
    CatalogSubject {
        title: "Secretarial Practice",
        chapters: &[
            "Introduction to Corporate Finance",
            "Sources of Corporate Finance",
            "Issue of Shares",
            "Issue of Debentures",
            "Deposits",
            "Corporate Finance – Other Sources",
            "Securities Market",
            "Stock Exchange",
            "Company Management",
            "Company Meetings – I",
            "Company Meetings – II",
            "Correspondence of Company Secretary",
        ],
    },
    CatalogSubject {
        title: "Organization of Commerce & Management",
        chapters: &[
            "Principles of Management",
            "Functions of Management",
            "Entrepreneurship Development",
            "Micro, Small and Medium Enterprises (MSMEs)",
            "Internal and External Trade",
            "Wholesale Trade",
            "Retail Trade",
            "International Trade",
            "Channels of Distribution",
            "Emerging Modes of Business",
            "Social Responsibilities of Business Organizations",
            "Consumer Protection",
        ],
    },
];

/// Total chapters across the catalog
pub fn chapter_total() -> usize {
    CATALOG.iter().map(|subject| subject.chapters.len()).sum()
}
