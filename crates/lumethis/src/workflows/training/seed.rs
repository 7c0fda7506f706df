//! The four curricula subsidiaries submitted in the February 2026 review cycle.
//!
//! Used for demos, default server wiring, and tests. Production wiring is expected
//! to load submissions from an intake collaborator instead.

use chrono::NaiveDate;

use super::domain::{ModuleContent, ProgramSubmission, SubmissionId, SubmissionStatus};
use crate::identity::OrganizationalUnit;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN)
}

fn module(
    title: &str,
    duration: Option<&str>,
    objectives: &[&str],
    key_topics: &[&str],
) -> ModuleContent {
    ModuleContent {
        title: title.to_string(),
        objectives: objectives.iter().map(|item| item.to_string()).collect(),
        duration: duration.map(str::to_string),
        key_topics: if key_topics.is_empty() {
            None
        } else {
            Some(key_topics.iter().map(|item| item.to_string()).collect())
        },
    }
}

pub fn standard_submissions() -> Vec<ProgramSubmission> {
    vec![
        construction_sops(),
        automotive_curriculum(),
        broadcast_manual(),
        drone_curriculum(),
    ]
}

fn construction_sops() -> ProgramSubmission {
    ProgramSubmission {
        id: SubmissionId::new("sub-004"),
        unit: OrganizationalUnit::ConstructionFm,
        title: "Standard Operating Procedures (Construction & FM)".to_string(),
        version: "1.0".to_string(),
        submitted_by: "General Manager (Operations)".to_string(),
        submission_date: date(2026, 2, 20),
        status: SubmissionStatus::PendingReview,
        compliance_score: 85,
        overview: "Comprehensive SOPs guiding all staff through standardized procedures to ensure \
                   operational efficiency, safety, and compliance across core business units."
            .to_string(),
        modules: vec![
            module(
                "General Operational Guidelines",
                None,
                &[
                    "Define work hours & attendance",
                    "Mandate HSE & PPE compliance",
                    "Establish reporting hierarchy",
                ],
                &["Code of Conduct", "Toolbox talks", "Daily/Weekly Reports"],
            ),
            module(
                "Construction Services SOP",
                None,
                &[
                    "Project Initiation & Feasibility",
                    "Execution Planning & Design",
                    "Quality Control & Handover",
                ],
                &["Site Assessment", "LPOs", "Snagging", "As-built documentation"],
            ),
            module(
                "Facility Management SOP",
                None,
                &[
                    "Routine & Preventive Maintenance",
                    "Vendor & Staff Management",
                    "Diesel Supply Chain Control",
                ],
                &["SLA Reviews", "Diesel Inventory", "HSE Audits", "Site Surveys"],
            ),
            module(
                "Asset & Logistics Operations",
                None,
                &[
                    "Asset Tagging & Lifecycle tracking",
                    "Fleet Management",
                    "Vehicle Servicing protocols",
                ],
                &[
                    "Asset Register",
                    "Depreciation",
                    "Service History",
                    "Preventive Maintenance",
                ],
            ),
            module(
                "Project Team Lifecycle",
                Some("Variable"),
                &[
                    "Manage Design Phases (Conceptual to Detailed)",
                    "Bill of Quantities (BoQ) Preparation",
                    "Client Approval & Sign-off",
                ],
                &[
                    "CAD Modeling",
                    "Procurement",
                    "Project Handover",
                    "Feasibility Studies",
                ],
            ),
        ],
        request_notes: Some(
            "Submitted for Group review. Covers Construction, FM, Assets, and Logistics units. \
             Includes specific Project Team protocols for design and execution."
                .to_string(),
        ),
    }
}

fn automotive_curriculum() -> ProgramSubmission {
    ProgramSubmission {
        id: SubmissionId::new("sub-003"),
        unit: OrganizationalUnit::Automotive,
        title: "Automotive Technician Curriculum (Levels 1-4)".to_string(),
        version: "1.0".to_string(),
        submitted_by: "Academy Director".to_string(),
        submission_date: date(2026, 2, 18),
        status: SubmissionStatus::PendingReview,
        compliance_score: 96,
        overview: "A structured, competency-based framework divided into 4 levels, ranging from \
                   Foundation to Specialist. Heavy emphasis on practical workshop skills (up to 70%)."
            .to_string(),
        modules: vec![
            module(
                "Level 1: Foundation (Safety & Basics)",
                Some("4 Weeks (160 Hrs)"),
                &[
                    "Understand workshop hazards & PPE",
                    "Perform oil service & fluid inspection",
                    "Identify major vehicle systems",
                ],
                &[
                    "Workshop Safety",
                    "Vehicle Systems Overview",
                    "Routine Maintenance",
                    "Tyres & Fluids",
                ],
            ),
            module(
                "Level 2: Core Technician",
                Some("8 Weeks (320 Hrs)"),
                &[
                    "Diagnose brake & suspension faults",
                    "Perform compression tests",
                    "Use multimeter & trace circuits",
                ],
                &[
                    "Brakes, Steering & Suspension",
                    "Engine Mechanical Basics",
                    "Auto Electrical Fundamentals",
                    "Service Diagnostics",
                ],
            ),
            module(
                "Level 3: Advanced Workshop Skills",
                Some("12 Weeks (480 Hrs)"),
                &[
                    "Interpret live data & scan tools",
                    "Diagnose sensor & ECU faults",
                    "Apply systematic fault-finding logic",
                ],
                &[
                    "Diagnostics & Scan Tools",
                    "Advanced Auto Electrical",
                    "HVAC & Comfort Systems",
                    "Fault-Finding Methodology",
                ],
            ),
            module(
                "Level 4: Specialist Programs",
                Some("4-8 Weeks"),
                &[
                    "High-voltage safety (EV/Hybrid)",
                    "ECU architecture & repair",
                    "Preventive fleet maintenance",
                ],
                &[
                    "Electric & Hybrid Vehicles",
                    "ECU Diagnostics",
                    "CNG Systems",
                    "Fleet Maintenance",
                ],
            ),
        ],
        request_notes: Some(
            "Comprehensive modular structure attached. Assessment structure: Practical 60%, \
             Theory 30%, Attendance 10%. Levels stack into Diploma in Automotive Technology."
                .to_string(),
        ),
    }
}

fn broadcast_manual() -> ProgramSubmission {
    ProgramSubmission {
        id: SubmissionId::new("sub-001"),
        unit: OrganizationalUnit::Broadcast,
        title: "Broadcast Training Manual (Version 1.0)".to_string(),
        version: "1.0".to_string(),
        submitted_by: "Antah Benedict Aondofa (Training Supervisor)".to_string(),
        submission_date: date(2026, 2, 12),
        status: SubmissionStatus::PendingReview,
        compliance_score: 88,
        overview: "Foundational training manual for broadcast operations, developed from \
                   subsidiary SOPs and structured for standardization."
            .to_string(),
        modules: vec![
            module(
                "Module 1: Staff Induction & Orientation",
                None,
                &[
                    "Understand group & Bright FM values",
                    "Broadcasting Ethics",
                    "Health, Safety & Security",
                ],
                &["Org Structure", "Workplace Conduct", "Training Pathway"],
            ),
            module(
                "Module 2: Programme Preparation & Presentation",
                None,
                &[
                    "Develop structured outlines",
                    "Demonstrate professional delivery",
                    "Handle live interactions",
                ],
                &["Editorial compliance", "Voice control", "Interview techniques"],
            ),
            module(
                "Module 3: Studio Operations",
                None,
                &[
                    "Identify studio equipment",
                    "Operate mixing console",
                    "Follow safety protocols",
                ],
                &[
                    "Pre-broadcast checklist",
                    "Emergency fault handling",
                    "Playout software",
                ],
            ),
            module(
                "Module 4: Advertising & Sponsorship",
                None,
                &[
                    "Advertisement approval workflow",
                    "Payment confirmation",
                    "On-air disclosure",
                ],
                &["Revenue protection", "NBC regulations", "Log management"],
            ),
            module(
                "Module 5: Professional Conduct & Ethics",
                None,
                &[
                    "Apply broadcasting ethics",
                    "Maintain confidentiality",
                    "Avoid conflicts of interest",
                ],
                &["Social Media Conduct", "Whistleblowing", "Dress code"],
            ),
            module(
                "Module 6: Audience Engagement",
                None,
                &[
                    "Handle complaints respectfully",
                    "Document feedback",
                    "Escalate issues",
                ],
                &["Complaint Log Template", "Escalation Framework", "On-air tone"],
            ),
        ],
        request_notes: Some(
            "Submitted for review and consideration. Seeking approval for pilot implementation \
             and adaptation as a template for other media subsidiaries."
                .to_string(),
        ),
    }
}

fn drone_curriculum() -> ProgramSubmission {
    ProgramSubmission {
        id: SubmissionId::new("sub-002"),
        unit: OrganizationalUnit::Drone,
        title: "RPAS (Drone) Training Curriculum".to_string(),
        version: "2.0 (Aug 2025)".to_string(),
        submitted_by: "Mubarak Sani (Chief Pilot)".to_string(),
        submission_date: date(2025, 8, 15),
        status: SubmissionStatus::ChangesRequested,
        compliance_score: 92,
        overview: "Comprehensive curriculum for Remotely Piloted Aircraft Systems (RPAS) covering \
                   entry-level to advanced BVLOS operations."
            .to_string(),
        modules: vec![
            module(
                "Company Indoctrination",
                Some("1 Week"),
                &[
                    "Familiarize with mission & values",
                    "Understand Safety Management System (SMS)",
                    "Regulatory Compliance (NCAA)",
                ],
                &["Code of Conduct", "Aerodynamics", "Airspace Management"],
            ),
            module(
                "Model-Specific RPA Type Training",
                Some("2 Weeks"),
                &[
                    "System Overview",
                    "Pre-flight Procedures",
                    "Emergency Recovery",
                ],
                &["GCS Setup", "Firmware Updates", "Manual Override"],
            ),
            module(
                "BVLOS Transition Training",
                Some("1 Week"),
                &[
                    "Understand BVLOS regulations",
                    "Airspace Risk Management",
                    "SORA (Specific Operations Risk Assessment)",
                ],
                &["DAA Tech", "NOTAM review", "Contingency drills"],
            ),
            module(
                "Maintenance & System Specifics",
                None,
                &[
                    "Airframe inspection",
                    "Battery management",
                    "Payload calibration",
                ],
                &["Hybrid Drones", "Fixed-Wing maintenance", "DJI Matrice 300"],
            ),
        ],
        request_notes: Some(
            "Standardization for field personnel flying under Briech UAS authority. Includes \
             NCAA compliance modules."
                .to_string(),
        ),
    }
}
