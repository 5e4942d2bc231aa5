use clap::{Parser, Subcommand, ValueEnum};
use dotenvy::dotenv;
use uuid::Uuid;
use walky_auth::create_access_token;
use walky_config::{AccessConfig, JwtConfig};
use walky_permissions::{AccessControl, Action, Resource, ResourcePermission, Role};

#[derive(Parser)]
#[command(name = "walky-cli")]
#[command(about = "Walky CLI - Access control tools for Walky Admin", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Issue a signed access token for local testing
    IssueToken {
        /// Role to embed in the token, e.g. campus_admin
        #[arg(short = 'r', long)]
        role: Role,

        /// Email address
        #[arg(short = 'e', long, default_value = "operator@walky.local")]
        email: String,

        /// School scope
        #[arg(long)]
        school_id: Option<Uuid>,

        /// Campus scope
        #[arg(long)]
        campus_id: Option<Uuid>,
    },
    /// Print the permission matrix, optionally for one role
    Matrix {
        /// Only print this role
        #[arg(short = 'r', long)]
        role: Option<Role>,

        /// Output format
        #[arg(short = 'f', long, value_enum, default_value_t = Format::Table)]
        format: Format,
    },
    /// Check whether a role may perform an action on a resource
    Check {
        #[arg(short = 'r', long)]
        role: Role,

        #[arg(long)]
        resource: Resource,

        #[arg(short = 'a', long, default_value = "read")]
        action: Action,
    },
    /// Check whether a role may open a dashboard route
    Route {
        #[arg(short = 'r', long)]
        role: Role,

        /// Route path, e.g. /students/active
        #[arg(short = 'p', long)]
        path: String,
    },
    /// List the roles a role may assign
    Assignable {
        #[arg(short = 'r', long)]
        role: Role,
    },
    /// Validate the role hierarchy and the configured route policy
    Validate,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Table,
    Json,
}

fn main() {
    dotenv().ok();

    let cli = Cli::parse();

    let access_config = match AccessConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Invalid access configuration: {}", e);
            std::process::exit(1);
        }
    };
    let access = AccessControl::new(access_config.unmapped_route_policy);

    match cli.command {
        Commands::IssueToken {
            role,
            email,
            school_id,
            campus_id,
        } => handle_issue_token(role, &email, school_id, campus_id),
        Commands::Matrix { role, format } => handle_matrix(&access, role, format),
        Commands::Check {
            role,
            resource,
            action,
        } => handle_check(&access, role, resource, action),
        Commands::Route { role, path } => handle_route(&access, role, &path),
        Commands::Assignable { role } => handle_assignable(&access, role),
        Commands::Validate => handle_validate(&access_config),
    }
}

fn handle_issue_token(role: Role, email: &str, school_id: Option<Uuid>, campus_id: Option<Uuid>) {
    let jwt_config = JwtConfig::from_env();
    let user_id = Uuid::new_v4();

    match create_access_token(user_id, email, role, school_id, campus_id, &jwt_config) {
        Ok(token) => println!("{}", token),
        Err(e) => {
            eprintln!("❌ Error issuing token: {}", e.error);
            std::process::exit(1);
        }
    }
}

fn handle_matrix(access: &AccessControl, role: Option<Role>, format: Format) {
    let roles: Vec<Role> = match role {
        Some(role) => vec![role],
        None => Role::ALL.to_vec(),
    };

    match format {
        Format::Json => {
            let matrix: serde_json::Map<String, serde_json::Value> = roles
                .iter()
                .map(|role| {
                    let grants = serde_json::to_value(access.role_permissions(*role))
                        .unwrap_or(serde_json::Value::Null);
                    (role.as_str().to_string(), grants)
                })
                .collect();

            match serde_json::to_string_pretty(&matrix) {
                Ok(json) => println!("{}", json),
                Err(e) => {
                    eprintln!("❌ Error encoding matrix: {}", e);
                    std::process::exit(1);
                }
            }
        }
        Format::Table => {
            for role in roles {
                println!("{} ({})", role.display_name(), role);
                for resource in Resource::ALL {
                    let grant = access.permissions(role, resource);
                    println!("  {:<22} {}", resource.as_str(), flags(&grant));
                }
                println!();
            }
        }
    }
}

fn flags(grant: &ResourcePermission) -> String {
    Action::ALL
        .iter()
        .map(|action| {
            let initial = &action.as_str()[..1];
            if grant.allows(*action) {
                initial.to_uppercase()
            } else {
                "-".to_string()
            }
        })
        .collect()
}

fn handle_check(access: &AccessControl, role: Role, resource: Resource, action: Action) {
    if access.has_permission(role, resource, action) {
        println!("✅ {} may {} {}", role, action, resource);
    } else {
        println!("⛔ {} may not {} {}", role, action, resource);
        std::process::exit(2);
    }
}

fn handle_route(access: &AccessControl, role: Role, path: &str) {
    let allowed = access.can_access_route(role, path);
    let resource = access
        .routes()
        .resource_for(path)
        .map(|r| r.to_string())
        .unwrap_or_else(|| format!("unmapped, policy {}", access.routes().policy()));

    if allowed {
        println!("✅ {} may open {} ({})", role, path, resource);
    } else {
        println!("⛔ {} may not open {} ({})", role, path, resource);
        std::process::exit(2);
    }
}

fn handle_assignable(access: &AccessControl, role: Role) {
    let names = access.hierarchy().assignable_display_names(role);
    if names.is_empty() {
        println!("{} cannot assign any roles", role.display_name());
        return;
    }
    for name in names {
        println!("{}", name);
    }
}

fn handle_validate(access_config: &AccessConfig) {
    match AccessControl::validated(access_config.unmapped_route_policy) {
        Ok(_) => {
            println!("✅ Role hierarchy is consistent with role ranks");
            println!(
                "   Unmapped routes: {}",
                access_config.unmapped_route_policy
            );
        }
        Err(e) => {
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }
}
