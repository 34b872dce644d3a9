use clap::Parser;
use indicatif::ProgressBar;
use validador_cnpj::{cli, config, error, export, extractor, receita, report, sheet};

use cli::{Cli, Commands};
use config::Config;
use error::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Check {
            arquivo,
            output,
            base_url,
            timeout,
        } => {
            println!("🧾 validador-cnpj - Validação Arquivo x Receita\n");

            // 1. Planilha
            println!("[1/4] Lendo a planilha...");
            let table = sheet::load_table(&arquivo)?;
            println!(
                "✔ {} células carregadas ({} linhas × {} colunas)\n",
                table.cells.len(),
                table.rows,
                table.cols
            );

            // 2. Extração
            println!("[2/4] Extraindo CNPJs...");
            let cnpjs = extractor::unique_cnpjs(&table);

            if cnpjs.is_empty() {
                println!("⚠️ Nenhum CNPJ encontrado no arquivo.");
                return Ok(());
            }
            println!("✔ {} CNPJ(s) encontrado(s)\n", cnpjs.len());

            // 3. Consulta sequencial à Receita
            println!("[3/4] Consultando a Receita Federal...");
            let url = match base_url {
                Some(url) => url,
                None => config.resolved_base_url(),
            };
            let segundos = timeout.unwrap_or(config.timeout_seconds);
            let client =
                receita::ReceitaClient::new(url, std::time::Duration::from_secs(segundos))?;

            let bar = ProgressBar::new(cnpjs.len() as u64);
            let records = receita::consultar_todos(&client, &cnpjs, |_done, _total, record| {
                if cli.verbose {
                    bar.println(format!("  {} → {}", record.cnpj(), record.situacao()));
                }
                bar.inc(1);
            });
            bar.finish_and_clear();
            println!("✔ Consulta concluída\n");

            // 4. Conferência e relatório
            println!("[4/4] Gerando o relatório...\n");
            let rows = report::build_report(&records, &table);
            export::print_table(&rows);

            let output_path = output
                .unwrap_or_else(|| std::path::PathBuf::from("resultado_validacao_cnpj.csv"));
            export::write_csv(&rows, &output_path)?;
            println!("\n✔ Resultado salvo em: {}", output_path.display());

            println!("\n✅ Validação concluída");
        }

        Commands::Extract { arquivo } => {
            println!("🔎 validador-cnpj - Extração de CNPJs\n");

            let table = sheet::load_table(&arquivo)?;
            let cnpjs = extractor::unique_cnpjs(&table);

            if cnpjs.is_empty() {
                println!("⚠️ Nenhum CNPJ encontrado no arquivo.");
                return Ok(());
            }

            for cnpj in &cnpjs {
                println!("{}", cnpj);
            }
            println!("\n✔ {} CNPJ(s) único(s)", cnpjs.len());
        }

        Commands::Config { set_base_url, show } => {
            let mut config = config;

            if let Some(url) = set_base_url {
                config.set_base_url(url)?;
                println!("✔ URL base configurada");
            }

            if show {
                println!("Configuração:");
                println!("  URL base: {}", config.base_url);
                println!("  Timeout: {}s", config.timeout_seconds);
            }
        }
    }

    Ok(())
}
