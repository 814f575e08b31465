// src/cli.rs
//
// Front end de terminal do console. Cada comando passa pelo roteador antes
// de agir, então os mesmos guards das páginas valem aqui.

use std::{
    io::{self, BufRead, Write},
    sync::Arc,
};

use anyhow::{anyhow, bail, Context};
use clap::{Parser, Subcommand, ValueEnum};

use crate::{
    config::AppConfig,
    forms::{
        modal::{FormSchema, RecordOf},
        CustomerForm, LookupForm, MaterialForm, SupplierForm, UserForm,
    },
    guards::{router, History, Router, LOGIN},
    models::{
        auth::{LoginPayload, RegisterPayload, Role},
        lookup::{ItemTypes, MaterialTypes, UnitMeasures},
        resource::Record,
        user::PasswordChange,
    },
    pages::{CrudPage, ToastLevel, Toasts, UsersPage},
    services::{ApiClient, AuthService},
    session::{FileStorage, Session},
    table::ColumnKey,
};

#[derive(Parser, Debug)]
#[command(name = "backoffice")]
#[command(about = "Console administrativo: orçamentos, materiais, clientes, fornecedores e usuários", long_about = None)]
pub struct Cli {
    /// URL da API (sobrepõe BACKOFFICE_API_URL)
    #[arg(short = 'u', long = "url", global = true)]
    pub url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Entra no console e grava a sessão
    Login {
        username: String,
        /// Sem a opção, a senha é lida da entrada padrão
        #[arg(long)]
        password: Option<String>,
    },
    /// Autocadastro de usuário
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        phone: String,
        #[arg(long)]
        address: String,
        #[arg(long)]
        city: String,
        #[arg(long)]
        uf: String,
        #[arg(long, default_value = "Comercial")]
        role: Role,
        #[arg(long)]
        password: Option<String>,
    },
    /// Encerra a sessão
    Logout,
    /// Mostra quem está logado
    Whoami,
    /// Lista registros com busca, filtros, ordenação e paginação
    List {
        resource: ResourceKind,
        #[arg(short, long)]
        search: Option<String>,
        /// Filtro por coluna no formato chave=valor (pode repetir)
        #[arg(short, long = "filter", value_name = "CHAVE=VALOR")]
        filters: Vec<String>,
        #[arg(long)]
        sort: Option<String>,
        #[arg(long, requires = "sort")]
        desc: bool,
        #[arg(short, long, default_value_t = 1)]
        page: usize,
    },
    /// Ativa ou inativa um registro
    Toggle { resource: ResourceKind, id: i64 },
    /// Exclui um registro (exige --yes)
    Delete {
        resource: ResourceKind,
        id: i64,
        #[arg(long)]
        yes: bool,
    },
    /// Troca a senha de um usuário (lida da entrada padrão)
    Passwd { id: i64 },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Users,
    Customers,
    Suppliers,
    Materials,
    UnitMeasures,
    MaterialTypes,
    ItemTypes,
}

impl ResourceKind {
    /// Página do console que abriga o recurso.
    pub fn route(self) -> &'static str {
        match self {
            ResourceKind::Users => router::USERS,
            ResourceKind::Customers => router::CUSTOMERS,
            ResourceKind::Suppliers => router::SUPPLIERS,
            ResourceKind::Materials => router::MATERIALS,
            ResourceKind::UnitMeasures | ResourceKind::MaterialTypes | ResourceKind::ItemTypes => {
                router::CONFIG
            }
        }
    }
}

// Opções do comando `list`
#[derive(Debug, Default)]
struct ListOptions {
    search: Option<String>,
    filters: Vec<(String, String)>,
    sort: Option<String>,
    desc: bool,
    page: usize,
}

fn parse_filter(raw: &str) -> anyhow::Result<(String, String)> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| anyhow!("Filtro inválido '{raw}', use chave=valor"))?;
    Ok((key.trim().to_string(), value.to_string()))
}

/// Estado compartilhado por todos os comandos de uma execução.
pub struct Console {
    session: Session,
    history: Arc<History>,
    router: Router,
    api: ApiClient,
}

impl Console {
    pub fn open(config: AppConfig) -> anyhow::Result<Self> {
        let storage = FileStorage::open(&config.session_file).with_context(|| {
            format!("Falha ao abrir a sessão em {}", config.session_file.display())
        })?;
        let session = Session::new(storage);
        let history = Arc::new(History::new());
        let api = ApiClient::new(config, session.clone(), history.clone())?;

        Ok(Self {
            session,
            history,
            router: Router::default(),
            api,
        })
    }

    fn enter(&self, path: &str) -> anyhow::Result<()> {
        if self.router.navigate(path, &self.session, self.history.as_ref()) {
            return Ok(());
        }
        match self.history.current().as_deref() {
            Some(LOGIN) => bail!("Sessão ausente ou expirada. Faça login com `backoffice login`."),
            _ => bail!("Seu perfil não tem acesso a {path}."),
        }
    }

    pub async fn run(&self, command: Command) -> anyhow::Result<()> {
        match command {
            Command::Login { username, password } => {
                self.enter(LOGIN)?;
                let password = match password {
                    Some(p) => p,
                    None => prompt("Senha: ")?,
                };
                let auth = AuthService::new(self.api.clone());
                let login = auth.login(LoginPayload { username, password }).await?;
                println!("Bem-vindo, {} ({})", login.name, login.role);
            }
            Command::Register { name, email, phone, address, city, uf, role, password } => {
                let password = match password {
                    Some(p) => p,
                    None => prompt("Senha: ")?,
                };
                let payload = RegisterPayload {
                    password,
                    role,
                    name,
                    phone_number: crate::forms::masks::phone(&phone),
                    email,
                    address,
                    city,
                    uf,
                };
                AuthService::new(self.api.clone()).register(payload).await?;
                println!("Cadastro realizado. Faça login para continuar.");
            }
            Command::Logout => {
                AuthService::new(self.api.clone()).logout()?;
                println!("Sessão encerrada.");
            }
            Command::Whoami => match self.session.info() {
                Some(info) => println!(
                    "{} <{}> · {}",
                    info.display_name.unwrap_or_default(),
                    info.username.unwrap_or_default(),
                    info.role.unwrap_or_default()
                ),
                None => println!("Ninguém logado."),
            },
            Command::List { resource, search, filters, sort, desc, page } => {
                self.enter(resource.route())?;
                let options = ListOptions {
                    search,
                    filters: filters.iter().map(|f| parse_filter(f)).collect::<Result<_, _>>()?,
                    sort,
                    desc,
                    page,
                };
                match resource {
                    ResourceKind::Users => self.list::<UserForm>(&options).await?,
                    ResourceKind::Customers => self.list::<CustomerForm>(&options).await?,
                    ResourceKind::Suppliers => self.list::<SupplierForm>(&options).await?,
                    ResourceKind::Materials => self.list::<MaterialForm>(&options).await?,
                    ResourceKind::UnitMeasures => {
                        self.list::<LookupForm<UnitMeasures>>(&options).await?
                    }
                    ResourceKind::MaterialTypes => {
                        self.list::<LookupForm<MaterialTypes>>(&options).await?
                    }
                    ResourceKind::ItemTypes => self.list::<LookupForm<ItemTypes>>(&options).await?,
                }
            }
            Command::Toggle { resource, id } => {
                self.enter(resource.route())?;
                match resource {
                    ResourceKind::Users => self.toggle::<UserForm>(id).await?,
                    ResourceKind::Customers => self.toggle::<CustomerForm>(id).await?,
                    ResourceKind::Suppliers => self.toggle::<SupplierForm>(id).await?,
                    ResourceKind::Materials => self.toggle::<MaterialForm>(id).await?,
                    ResourceKind::UnitMeasures => self.toggle::<LookupForm<UnitMeasures>>(id).await?,
                    ResourceKind::MaterialTypes => {
                        self.toggle::<LookupForm<MaterialTypes>>(id).await?
                    }
                    ResourceKind::ItemTypes => self.toggle::<LookupForm<ItemTypes>>(id).await?,
                }
            }
            Command::Delete { resource, id, yes } => {
                self.enter(resource.route())?;
                match resource {
                    ResourceKind::Users => self.delete::<UserForm>(id, yes).await?,
                    ResourceKind::Customers => self.delete::<CustomerForm>(id, yes).await?,
                    ResourceKind::Suppliers => self.delete::<SupplierForm>(id, yes).await?,
                    ResourceKind::Materials => self.delete::<MaterialForm>(id, yes).await?,
                    ResourceKind::UnitMeasures => {
                        self.delete::<LookupForm<UnitMeasures>>(id, yes).await?
                    }
                    ResourceKind::MaterialTypes => {
                        self.delete::<LookupForm<MaterialTypes>>(id, yes).await?
                    }
                    ResourceKind::ItemTypes => self.delete::<LookupForm<ItemTypes>>(id, yes).await?,
                }
            }
            Command::Passwd { id } => {
                self.enter(router::USERS)?;
                let new_password = prompt("Nova senha: ")?;
                let confirm = prompt("Confirme a nova senha: ")?;
                if new_password.is_empty() {
                    bail!("A nova senha não pode ser vazia.");
                }
                if new_password != confirm {
                    bail!("{}", crate::forms::rules::MSG_PASSWORD_MISMATCH);
                }

                let mut page = UsersPage::new(self.api.clone());
                let result = page
                    .change_password(PasswordChange {
                        user_id: id,
                        current_password: None,
                        new_password,
                    })
                    .await;
                print_toasts(page.page_mut().toasts_mut());
                result?;
            }
        }
        Ok(())
    }

    async fn loaded_page<F: FormSchema>(&self) -> anyhow::Result<CrudPage<F>> {
        let mut page = CrudPage::<F>::new(self.api.clone());
        let result = page.load().await;
        print_toasts(page.toasts_mut());
        result?;
        Ok(page)
    }

    async fn list<F: FormSchema>(&self, options: &ListOptions) -> anyhow::Result<()> {
        let mut page = self.loaded_page::<F>().await?;
        let table = page.table_mut();

        if let Some(term) = &options.search {
            table.on_search(term);
        }
        for (key, value) in &options.filters {
            table.on_filter(&ColumnKey::field(key.as_str()), value);
        }
        if let Some(key) = &options.sort {
            let key = ColumnKey::field(key.as_str());
            table.on_sort_click(&key);
            if options.desc {
                table.on_sort_click(&key);
            }
        }
        table.go_to_page(options.page);

        let header: Vec<&str> = table
            .columns()
            .iter()
            .filter(|c| c.is_data())
            .map(|c| c.label.as_str())
            .collect();
        println!("{}", header.join(" | "));
        for row in table.page_cells() {
            println!("{}", row.join(" | "));
        }

        let stats = page.stats();
        let table = page.table();
        println!(
            "Página {}/{} · {} encontrados · total {} ({} ativos, {} inativos)",
            table.current_page(),
            table.total_pages().max(1),
            table.filtered().len(),
            stats.total,
            stats.active,
            stats.inactive
        );
        Ok(())
    }

    async fn find<F: FormSchema>(&self, id: i64) -> anyhow::Result<(CrudPage<F>, RecordOf<F>)> {
        let page = self.loaded_page::<F>().await?;
        let record = page
            .records()
            .iter()
            .find(|r| r.id() == Some(id))
            .cloned()
            .ok_or_else(|| anyhow!("Registro {id} não encontrado"))?;
        Ok((page, record))
    }

    async fn toggle<F: FormSchema>(&self, id: i64) -> anyhow::Result<()> {
        let (mut page, record) = self.find::<F>(id).await?;
        let result = page.toggle_status(&record).await;
        print_toasts(page.toasts_mut());
        result?;
        Ok(())
    }

    async fn delete<F: FormSchema>(&self, id: i64, yes: bool) -> anyhow::Result<()> {
        let (mut page, record) = self.find::<F>(id).await?;
        page.request_delete(record);

        if !yes {
            page.cancel_delete();
            println!("Exclusão cancelada. Use --yes para confirmar.");
            return Ok(());
        }

        let result = page.confirm_delete().await;
        print_toasts(page.toasts_mut());
        result?;
        Ok(())
    }
}

fn prompt(label: &str) -> anyhow::Result<String> {
    print!("{label}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

fn print_toasts(toasts: &mut Toasts) {
    for toast in toasts.drain() {
        match toast.level {
            ToastLevel::Success => println!("{}", toast.message),
            ToastLevel::Error => eprintln!("{}", toast.message),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_list_with_filters() {
        let cli = Cli::parse_from([
            "backoffice", "list", "customers", "--search", "alfa", "-f", "customerType=corp",
            "--sort", "name", "--desc", "--page", "2",
        ]);
        let Command::List { resource, filters, desc, page, .. } = cli.command else {
            panic!("esperava list");
        };
        assert_eq!(resource, ResourceKind::Customers);
        assert_eq!(filters, vec!["customerType=corp".to_string()]);
        assert!(desc);
        assert_eq!(page, 2);
    }

    #[test]
    fn filter_needs_key_and_value() {
        assert_eq!(
            parse_filter("city=Curitiba").unwrap(),
            ("city".to_string(), "Curitiba".to_string())
        );
        assert!(parse_filter("city").is_err());
    }

    #[test]
    fn lookups_live_on_the_config_page() {
        assert_eq!(ResourceKind::ItemTypes.route(), router::CONFIG);
        assert_eq!(ResourceKind::Users.route(), router::USERS);
    }

    #[test]
    fn register_role_parses_accented_label() {
        let cli = Cli::parse_from([
            "backoffice", "register", "--name", "Ana", "--email", "a@b.com", "--phone", "11987654321",
            "--address", "Rua", "--city", "Rio", "--uf", "RJ", "--role", "Orçamentista",
            "--password", "123456",
        ]);
        let Command::Register { role, .. } = cli.command else {
            panic!("esperava register");
        };
        assert_eq!(role, Role::Estimator);
    }
}
