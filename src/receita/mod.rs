mod client;
mod types;

pub use client::{somente_digitos, ReceitaClient};
pub use types::ReceitaRecord;

/// Consulta todos os CNPJs, um por vez, na ordem recebida.
///
/// O callback de progresso recebe (concluídas, total, registro) após
/// cada consulta; barra, log ou qualquer outra renderização fica por
/// conta de quem chama.
pub fn consultar_todos<F>(
    client: &ReceitaClient,
    cnpjs: &[String],
    mut progress: F,
) -> Vec<ReceitaRecord>
where
    F: FnMut(usize, usize, &ReceitaRecord),
{
    let total = cnpjs.len();
    let mut records = Vec::with_capacity(total);

    for (i, cnpj) in cnpjs.iter().enumerate() {
        let record = client.consultar(cnpj);
        progress(i + 1, total, &record);
        records.push(record);
    }

    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    // Porta fechada em loopback: a falha de conexão é imediata e vira
    // `Failed`, sem abortar a sequência
    #[test]
    fn test_consultar_todos_falha_nao_interrompe() {
        let client = ReceitaClient::new("http://127.0.0.1:9", Duration::from_secs(1)).unwrap();
        let cnpjs = vec![
            "11.111.111/1111-11".to_string(),
            "22.222.222/2222-22".to_string(),
        ];

        let mut seen = Vec::new();
        let records = consultar_todos(&client, &cnpjs, |done, total, record| {
            seen.push((done, total, record.cnpj().to_string()));
        });

        assert_eq!(records.len(), 2);
        assert!(records
            .iter()
            .all(|r| matches!(r, ReceitaRecord::Failed { .. })));
        assert_eq!(records[0].cnpj(), "11.111.111/1111-11");
        assert_eq!(records[1].cnpj(), "22.222.222/2222-22");

        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0].0, 1);
        assert_eq!(seen[1].0, 2);
        assert!(seen.iter().all(|(_, total, _)| *total == 2));
    }

    #[test]
    fn test_consultar_todos_vazio() {
        let client = ReceitaClient::new("http://127.0.0.1:9", Duration::from_secs(1)).unwrap();
        let mut calls = 0;
        let records = consultar_todos(&client, &[], |_, _, _| calls += 1);

        assert!(records.is_empty());
        assert_eq!(calls, 0);
    }
}
