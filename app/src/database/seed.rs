use sea_orm::{DatabaseConnection, DbErr};
use serde_json::{json, Value};
use tracing::info;

use crate::{
    config::config::Config,
    repos::{
        status_definitions::StatusDefinitionsRepo, translations::TranslationsRepo,
        users::{NewUser, UsersRepo},
    },
};

const STATUS_CATALOG: [(&str, &str); 8] = [
    ("TO_DO", "Tasks that are planned but not yet started"),
    ("IN_PROGRESS", "Tasks currently being worked on"),
    ("IN_REVIEW", "Tasks awaiting code review or approval"),
    ("DONE", "Completed tasks"),
    ("TESTING", "Tasks in testing phase"),
    ("AWAITING_APPROVAL", "Tasks waiting for stakeholder approval"),
    ("READY_FOR_DEPLOY", "Tasks ready to be deployed to production"),
    ("ICEBOX", "Tasks that are deprioritized or on hold"),
];

pub async fn seed_database(db: &DatabaseConnection, config: &Config) -> Result<(), DbErr> {
    seed_status_definitions(db).await?;
    seed_translations(db).await?;
    seed_admin_user(db, config).await?;

    Ok(())
}

async fn seed_status_definitions(db: &DatabaseConnection) -> Result<(), DbErr> {
    let definitions_repo = StatusDefinitionsRepo::new(db.clone());

    let mut created = 0;
    for (code, description) in STATUS_CATALOG {
        if definitions_repo.get_by_code(code).await?.is_none() {
            definitions_repo
                .create(code.to_string(), Some(description.to_string()))
                .await?;
            created += 1;
        }
    }

    if created > 0 {
        info!("Seeded {} status definitions", created);
    }

    Ok(())
}

async fn seed_translations(db: &DatabaseConnection) -> Result<(), DbErr> {
    let translations_repo = TranslationsRepo::new(db.clone());

    for (language, translations) in [
        ("en", english_translations()),
        ("es", spanish_translations()),
        ("fr", french_translations()),
        ("de", german_translations()),
    ] {
        if translations_repo.get_by_language(language).await?.is_none() {
            translations_repo
                .create(language.to_string(), translations)
                .await?;
            info!("Seeded {} translations", language);
        }
    }

    Ok(())
}

async fn seed_admin_user(db: &DatabaseConnection, config: &Config) -> Result<(), DbErr> {
    let users_repo = UsersRepo::new(db.clone());

    if users_repo.get_by_email(&config.admin_email).await?.is_some() {
        info!("Default user already exists");
        return Ok(());
    }

    let user = users_repo
        .create(NewUser {
            full_name: config.admin_name.clone(),
            email: config.admin_email.clone(),
            access_token: Some(config.admin_token.clone()),
        })
        .await?;
    info!("Created default user: {}", user.full_name);

    Ok(())
}

fn english_translations() -> Value {
    json!({
        "common": {
            "appName": "Task Blaster",
            "save": "Save",
            "cancel": "Cancel",
            "delete": "Delete",
            "loading": "Loading..."
        },
        "tasks": {
            "statuses": {
                "TO_DO": "To Do",
                "IN_PROGRESS": "In Progress",
                "IN_REVIEW": "In Review",
                "DONE": "Done",
                "TESTING": "Testing",
                "AWAITING_APPROVAL": "Awaiting Approval",
                "READY_FOR_DEPLOY": "Ready for Deploy",
                "ICEBOX": "Icebox"
            },
            "statusDescriptions": {
                "TO_DO": "Tasks that are planned but not yet started",
                "IN_PROGRESS": "Tasks currently being worked on",
                "IN_REVIEW": "Tasks awaiting code review or approval",
                "DONE": "Completed tasks",
                "TESTING": "Tasks in testing phase",
                "AWAITING_APPROVAL": "Tasks waiting for stakeholder approval",
                "READY_FOR_DEPLOY": "Tasks ready to be deployed to production",
                "ICEBOX": "Tasks that are deprioritized or on hold"
            },
            "priorities": {
                "LOW": "Low",
                "MEDIUM": "Medium",
                "HIGH": "High",
                "CRITICAL": "Critical"
            }
        }
    })
}

fn spanish_translations() -> Value {
    json!({
        "common": {
            "appName": "Task Blaster",
            "save": "Guardar",
            "cancel": "Cancelar",
            "delete": "Eliminar",
            "loading": "Cargando..."
        },
        "tasks": {
            "statuses": {
                "TO_DO": "Por Hacer",
                "IN_PROGRESS": "En Progreso",
                "IN_REVIEW": "En Revisión",
                "DONE": "Hecho",
                "TESTING": "Pruebas",
                "AWAITING_APPROVAL": "En Espera de Aprobación",
                "READY_FOR_DEPLOY": "Listo para Desplegar",
                "ICEBOX": "Congelador"
            },
            "statusDescriptions": {
                "TO_DO": "Tareas planificadas pero no iniciadas",
                "IN_PROGRESS": "Tareas en las que se está trabajando actualmente",
                "IN_REVIEW": "Tareas en espera de revisión de código o aprobación",
                "DONE": "Tareas completadas",
                "TESTING": "Tareas en fase de pruebas",
                "AWAITING_APPROVAL": "Tareas en espera de aprobación de interesados",
                "READY_FOR_DEPLOY": "Tareas listas para desplegarse en producción",
                "ICEBOX": "Tareas despriorizadas o en espera"
            },
            "priorities": {
                "LOW": "Baja",
                "MEDIUM": "Media",
                "HIGH": "Alta",
                "CRITICAL": "Crítica"
            }
        }
    })
}

fn french_translations() -> Value {
    json!({
        "common": {
            "appName": "Task Blaster",
            "save": "Enregistrer",
            "cancel": "Annuler",
            "delete": "Supprimer",
            "loading": "Chargement..."
        },
        "tasks": {
            "statuses": {
                "TO_DO": "À Faire",
                "IN_PROGRESS": "En Cours",
                "IN_REVIEW": "En Révision",
                "DONE": "Terminé",
                "TESTING": "Tests",
                "AWAITING_APPROVAL": "En Attente d'Approbation",
                "READY_FOR_DEPLOY": "Prêt pour le Déploiement",
                "ICEBOX": "Frigo"
            },
            "statusDescriptions": {
                "TO_DO": "Tâches planifiées mais pas encore commencées",
                "IN_PROGRESS": "Tâches en cours de traitement",
                "IN_REVIEW": "Tâches en attente de révision de code ou d'approbation",
                "DONE": "Tâches terminées",
                "TESTING": "Tâches en phase de test",
                "AWAITING_APPROVAL": "Tâches en attente d'approbation des parties prenantes",
                "READY_FOR_DEPLOY": "Tâches prêtes à être déployées en production",
                "ICEBOX": "Tâches déprioritarisées ou en attente"
            },
            "priorities": {
                "LOW": "Basse",
                "MEDIUM": "Moyenne",
                "HIGH": "Haute",
                "CRITICAL": "Critique"
            }
        }
    })
}

fn german_translations() -> Value {
    json!({
        "common": {
            "appName": "Task Blaster",
            "save": "Speichern",
            "cancel": "Abbrechen",
            "delete": "Löschen",
            "loading": "Wird geladen..."
        },
        "tasks": {
            "statuses": {
                "TO_DO": "Zu Erledigen",
                "IN_PROGRESS": "In Bearbeitung",
                "IN_REVIEW": "In Überprüfung",
                "DONE": "Fertig",
                "TESTING": "Testphase",
                "AWAITING_APPROVAL": "Wartet auf Genehmigung",
                "READY_FOR_DEPLOY": "Bereit zur Bereitstellung",
                "ICEBOX": "Eisbox"
            },
            "statusDescriptions": {
                "TO_DO": "Geplante, aber noch nicht begonnene Aufgaben",
                "IN_PROGRESS": "Aufgaben, an denen derzeit gearbeitet wird",
                "IN_REVIEW": "Aufgaben, die auf Code-Review oder Genehmigung warten",
                "DONE": "Abgeschlossene Aufgaben",
                "TESTING": "Aufgaben in der Testphase",
                "AWAITING_APPROVAL": "Aufgaben, die auf Stakeholder-Genehmigung warten",
                "READY_FOR_DEPLOY": "Aufgaben, die bereit für die Produktionsbereitstellung sind",
                "ICEBOX": "Aufgaben, die zurückgestellt oder pausiert sind"
            },
            "priorities": {
                "LOW": "Niedrig",
                "MEDIUM": "Mittel",
                "HIGH": "Hoch",
                "CRITICAL": "Kritisch"
            }
        }
    })
}
