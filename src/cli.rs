use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "validador-cnpj")]
#[command(about = "Validação de CNPJs de planilhas Excel contra a Receita Federal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Mostra o resultado de cada consulta durante a execução
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Valida os CNPJs da planilha contra a Receita e gera o relatório
    Check {
        /// Planilha Excel (.xlsx/.xls)
        #[arg(required = true)]
        arquivo: PathBuf,

        /// Arquivo CSV de saída (padrão: resultado_validacao_cnpj.csv)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// URL base da API da Receita (sobrepõe configuração e ambiente)
        #[arg(long)]
        base_url: Option<String>,

        /// Timeout por consulta, em segundos
        #[arg(long)]
        timeout: Option<u64>,
    },

    /// Lista os CNPJs únicos da planilha, sem consultar a Receita
    Extract {
        /// Planilha Excel (.xlsx/.xls)
        #[arg(required = true)]
        arquivo: PathBuf,
    },

    /// Mostra/edita a configuração
    Config {
        /// Define a URL base da API da Receita
        #[arg(long)]
        set_base_url: Option<String>,

        /// Mostra a configuração atual
        #[arg(long)]
        show: bool,
    },
}
