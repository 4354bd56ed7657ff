//! Canonical role enumeration and the base hierarchy table.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of canonical roles this engine maps into.
///
/// Every role carries exactly one base hierarchy value in [0,100] via
/// [`BASE_HIERARCHY`]. Wire names are SCREAMING_SNAKE_CASE.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CanonicalRole {
    /// Owns the organization; unrestricted access.
    OrganizationOwner,
    /// Full system administrator.
    Admin,
    /// Executive leadership.
    Exec,
    /// Creative lead of an entire show.
    Showrunner,
    /// Organization-level administrator.
    OrgAdmin,
    /// Executive producer.
    ExecutiveProducer,
    /// Creative director.
    CreativeDirector,
    /// Director.
    Director,
    /// Supervises post-production.
    PostSupervisor,
    /// Generic departmental manager.
    Manager,
    /// Supervising producer.
    SupervisingProducer,
    /// Manages the physical production.
    ProductionManager,
    /// Technical director.
    TechnicalDirector,
    /// Accounting and finance.
    Accounting,
    /// Line producer.
    LineProducer,
    /// Senior producer.
    SeniorProducer,
    /// Art director.
    ArtDirector,
    /// Producer.
    Producer,
    /// Music supervisor.
    MusicSupervisor,
    /// Co-producer.
    CoProducer,
    /// Director of photography.
    Cinematographer,
    /// Associate producer.
    AssociateProducer,
    /// Production coordinator.
    ProductionCoordinator,
    /// Editor.
    Editor,
    /// Writer.
    Writer,
    /// Visual effects artist.
    VfxArtist,
    /// Colorist.
    Colorist,
    /// Sound designer.
    SoundDesigner,
    /// Sound mixer.
    SoundMixer,
    /// Audio engineer.
    AudioEngineer,
    /// Camera operator.
    CameraOperator,
    /// Script supervisor.
    ScriptSupervisor,
    /// Graphics artist.
    GraphicsArtist,
    /// Assistant editor.
    AssistantEditor,
    /// Lighting technician.
    LightingTechnician,
    /// Gaffer.
    Gaffer,
    /// Media manager.
    MediaManager,
    /// Digital imaging technician.
    DitTechnician,
    /// Quality control specialist.
    QcSpecialist,
    /// Grip.
    Grip,
    /// Generic dashboard member.
    Member,
    /// Boom operator.
    BoomOperator,
    /// Set coordinator.
    SetCoordinator,
    /// Production assistant.
    ProductionAssistant,
    /// Intern.
    Intern,
    /// Unauthenticated or unrecognized — lowest access.
    Guest,
}

/// Base hierarchy for every canonical role, in declaration order.
///
/// This is process-wide constant configuration. The direct-match pass of
/// the role mapper iterates this table in order, so precedence between
/// roles is exactly the order written here.
pub const BASE_HIERARCHY: &[(CanonicalRole, u8)] = &[
    (CanonicalRole::OrganizationOwner, 100),
    (CanonicalRole::Admin, 100),
    (CanonicalRole::Exec, 95),
    (CanonicalRole::Showrunner, 92),
    (CanonicalRole::OrgAdmin, 90),
    (CanonicalRole::ExecutiveProducer, 88),
    (CanonicalRole::CreativeDirector, 86),
    (CanonicalRole::Director, 85),
    (CanonicalRole::PostSupervisor, 82),
    (CanonicalRole::Manager, 80),
    (CanonicalRole::SupervisingProducer, 78),
    (CanonicalRole::ProductionManager, 76),
    (CanonicalRole::TechnicalDirector, 74),
    (CanonicalRole::Accounting, 70),
    (CanonicalRole::LineProducer, 68),
    (CanonicalRole::SeniorProducer, 65),
    (CanonicalRole::ArtDirector, 64),
    (CanonicalRole::Producer, 60),
    (CanonicalRole::MusicSupervisor, 58),
    (CanonicalRole::CoProducer, 56),
    (CanonicalRole::Cinematographer, 55),
    (CanonicalRole::AssociateProducer, 52),
    (CanonicalRole::ProductionCoordinator, 50),
    (CanonicalRole::Editor, 50),
    (CanonicalRole::Writer, 48),
    (CanonicalRole::VfxArtist, 46),
    (CanonicalRole::Colorist, 45),
    (CanonicalRole::SoundDesigner, 45),
    (CanonicalRole::SoundMixer, 44),
    (CanonicalRole::AudioEngineer, 43),
    (CanonicalRole::CameraOperator, 42),
    (CanonicalRole::ScriptSupervisor, 42),
    (CanonicalRole::GraphicsArtist, 41),
    (CanonicalRole::AssistantEditor, 40),
    (CanonicalRole::LightingTechnician, 40),
    (CanonicalRole::Gaffer, 39),
    (CanonicalRole::MediaManager, 38),
    (CanonicalRole::DitTechnician, 37),
    (CanonicalRole::QcSpecialist, 35),
    (CanonicalRole::Grip, 34),
    (CanonicalRole::Member, 30),
    (CanonicalRole::BoomOperator, 28),
    (CanonicalRole::SetCoordinator, 26),
    (CanonicalRole::ProductionAssistant, 20),
    (CanonicalRole::Intern, 15),
    (CanonicalRole::Guest, 10),
];

impl CanonicalRole {
    /// Return the role's base hierarchy from the static table.
    pub fn base_hierarchy(&self) -> u8 {
        BASE_HIERARCHY
            .iter()
            .find(|(role, _)| role == self)
            .map(|(_, h)| *h)
            .unwrap_or(0)
    }

    /// Return the role's wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OrganizationOwner => "ORGANIZATION_OWNER",
            Self::Admin => "ADMIN",
            Self::Exec => "EXEC",
            Self::Showrunner => "SHOWRUNNER",
            Self::OrgAdmin => "ORG_ADMIN",
            Self::ExecutiveProducer => "EXECUTIVE_PRODUCER",
            Self::CreativeDirector => "CREATIVE_DIRECTOR",
            Self::Director => "DIRECTOR",
            Self::PostSupervisor => "POST_SUPERVISOR",
            Self::Manager => "MANAGER",
            Self::SupervisingProducer => "SUPERVISING_PRODUCER",
            Self::ProductionManager => "PRODUCTION_MANAGER",
            Self::TechnicalDirector => "TECHNICAL_DIRECTOR",
            Self::Accounting => "ACCOUNTING",
            Self::LineProducer => "LINE_PRODUCER",
            Self::SeniorProducer => "SENIOR_PRODUCER",
            Self::ArtDirector => "ART_DIRECTOR",
            Self::Producer => "PRODUCER",
            Self::MusicSupervisor => "MUSIC_SUPERVISOR",
            Self::CoProducer => "CO_PRODUCER",
            Self::Cinematographer => "CINEMATOGRAPHER",
            Self::AssociateProducer => "ASSOCIATE_PRODUCER",
            Self::ProductionCoordinator => "PRODUCTION_COORDINATOR",
            Self::Editor => "EDITOR",
            Self::Writer => "WRITER",
            Self::VfxArtist => "VFX_ARTIST",
            Self::Colorist => "COLORIST",
            Self::SoundDesigner => "SOUND_DESIGNER",
            Self::SoundMixer => "SOUND_MIXER",
            Self::AudioEngineer => "AUDIO_ENGINEER",
            Self::CameraOperator => "CAMERA_OPERATOR",
            Self::ScriptSupervisor => "SCRIPT_SUPERVISOR",
            Self::GraphicsArtist => "GRAPHICS_ARTIST",
            Self::AssistantEditor => "ASSISTANT_EDITOR",
            Self::LightingTechnician => "LIGHTING_TECHNICIAN",
            Self::Gaffer => "GAFFER",
            Self::MediaManager => "MEDIA_MANAGER",
            Self::DitTechnician => "DIT_TECHNICIAN",
            Self::QcSpecialist => "QC_SPECIALIST",
            Self::Grip => "GRIP",
            Self::Member => "MEMBER",
            Self::BoomOperator => "BOOM_OPERATOR",
            Self::SetCoordinator => "SET_COORDINATOR",
            Self::ProductionAssistant => "PRODUCTION_ASSISTANT",
            Self::Intern => "INTERN",
            Self::Guest => "GUEST",
        }
    }
}

impl fmt::Display for CanonicalRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CanonicalRole {
    type Err = rolebridge_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_uppercase();
        BASE_HIERARCHY
            .iter()
            .map(|(role, _)| *role)
            .find(|role| role.as_str() == upper)
            .ok_or_else(|| {
                rolebridge_core::AppError::validation(format!("Unknown canonical role: '{s}'"))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_role_has_exactly_one_table_entry() {
        let names: HashSet<&str> = BASE_HIERARCHY.iter().map(|(r, _)| r.as_str()).collect();
        assert_eq!(names.len(), BASE_HIERARCHY.len());
        // Spot-check roundtrip through the table for all entries.
        for (role, hierarchy) in BASE_HIERARCHY {
            assert_eq!(role.base_hierarchy(), *hierarchy);
            assert!(*hierarchy <= 100);
        }
    }

    #[test]
    fn test_from_str() {
        assert_eq!(
            "producer".parse::<CanonicalRole>().unwrap(),
            CanonicalRole::Producer
        );
        assert_eq!(
            "ORGANIZATION_OWNER".parse::<CanonicalRole>().unwrap(),
            CanonicalRole::OrganizationOwner
        );
        assert!("bogus".parse::<CanonicalRole>().is_err());
    }

    #[test]
    fn test_serde_wire_names() {
        let json = serde_json::to_string(&CanonicalRole::AssistantEditor).unwrap();
        assert_eq!(json, "\"ASSISTANT_EDITOR\"");
        let role: CanonicalRole = serde_json::from_str("\"QC_SPECIALIST\"").unwrap();
        assert_eq!(role, CanonicalRole::QcSpecialist);
    }
}
